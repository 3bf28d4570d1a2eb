#![no_main]

use focus_host::{
    EndpointHandle, EndpointTable, FieldEndpoint, FocusHost, HostConfig, OrderOptions,
};
use input_core::{FieldId, NumericValue, NumpadKey};
use input_policy::{IntegerConfig, IntegerPolicy, Policy};
use libfuzzer_sys::fuzz_target;

struct Field {
    id: FieldId,
    policy: Policy,
}

impl FieldEndpoint for Field {
    fn id(&self) -> FieldId {
        self.id
    }

    fn input_policy(&self) -> &Policy {
        &self.policy
    }

    fn apply(&mut self, _value: &NumericValue) {}

    fn become_active(&mut self) {}

    fn resign_active(&mut self) {}
}

const FIELDS: u64 = 4;

fuzz_target!(|data: &[u8]| {
    let Some((&config, ops)) = data.split_first() else {
        return;
    };
    let policy: Policy = IntegerPolicy::new(IntegerConfig {
        max_digits: 4,
        allow_negative: true,
    })
    .expect("valid config")
    .into();
    let mut host = FocusHost::new(HostConfig {
        wrap: config & 1 != 0,
        enforce_order: config & 2 != 0,
    });
    let mut endpoints = EndpointTable::new();
    let mut handles: Vec<Option<EndpointHandle>> = vec![None; FIELDS as usize];

    for pair in ops.chunks(2) {
        let [op, arg] = *pair else {
            break;
        };
        let slot = u64::from(arg) % FIELDS;
        let id = FieldId::from_raw(slot + 1);
        match op % 8 {
            0 => {
                let handle = endpoints.mount(Field {
                    id,
                    policy: policy.clone(),
                });
                let _ = host.register(id, handle, &mut endpoints);
                handles[slot as usize] = Some(handle);
            }
            1 => {
                if let Some(handle) = handles[slot as usize].take() {
                    endpoints.unmount(handle);
                }
            }
            2 => {
                host.unregister(id);
            }
            3 => {
                let _ = host.set_active(Some(id), &mut endpoints);
            }
            4 => {
                let ids = (0..FIELDS)
                    .filter(|i| arg & (1 << i) != 0)
                    .map(|i| FieldId::from_raw(i + 1));
                let options = OrderOptions {
                    preserve_active: arg & 0x10 != 0,
                    auto_insert_active_if_missing: arg & 0x20 != 0,
                };
                let _ = host.set_order(ids, options, &mut endpoints);
            }
            5 => {
                host.focus_next(&mut endpoints);
            }
            6 => {
                host.done(&mut endpoints);
            }
            _ => {
                let key = match arg % 4 {
                    0 => NumpadKey::Digit(arg % 10),
                    1 => NumpadKey::Minus,
                    2 => NumpadKey::Backspace,
                    _ => NumpadKey::Prev,
                };
                host.handle_key(&key, &mut endpoints);
            }
        }

        for raw in 1..=FIELDS {
            let id = FieldId::from_raw(raw);
            if let Some(value) = host.value(id) {
                assert!(value.is_well_formed(), "{id}: {value:?}");
            }
        }
        if let Some(active) = host.active_id()
            && host.config().enforce_order
        {
            assert!(host.order().contains(&active), "{active} outside order");
        }
    }
});
