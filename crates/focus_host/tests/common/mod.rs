#![allow(dead_code)]

use focus_host::{EndpointHandle, EndpointTable, FieldEndpoint};
use input_core::{FieldId, NumericValue};
use input_policy::{
    DecimalConfig, DecimalPolicy, DurationConfig, DurationPolicy, IntegerConfig, IntegerPolicy,
    Policy,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared event log, one line per endpoint call.
pub type Journal = Rc<RefCell<Vec<String>>>;

pub struct TestField {
    id: FieldId,
    policy: Policy,
    pub shown: NumericValue,
    journal: Journal,
}

impl FieldEndpoint for TestField {
    fn id(&self) -> FieldId {
        self.id
    }

    fn input_policy(&self) -> &Policy {
        &self.policy
    }

    fn apply(&mut self, value: &NumericValue) {
        self.shown = value.clone();
        self.journal
            .borrow_mut()
            .push(format!("{} apply {:?}", self.id.as_raw(), value.text));
    }

    fn become_active(&mut self) {
        self.journal
            .borrow_mut()
            .push(format!("{} become_active", self.id.as_raw()));
    }

    fn resign_active(&mut self) {
        self.journal
            .borrow_mut()
            .push(format!("{} resign_active", self.id.as_raw()));
    }
}

pub fn integer(max_digits: usize) -> Policy {
    IntegerPolicy::new(IntegerConfig {
        max_digits,
        allow_negative: false,
    })
    .unwrap()
    .into()
}

pub fn decimal() -> Policy {
    DecimalPolicy::new(DecimalConfig::default()).unwrap().into()
}

pub fn duration() -> Policy {
    DurationPolicy::new(DurationConfig::default()).into()
}

pub fn id(raw: u64) -> FieldId {
    FieldId::from_raw(raw)
}

pub struct Rig {
    pub endpoints: EndpointTable<TestField>,
    pub journal: Journal,
}

impl Rig {
    pub fn new() -> Self {
        Self {
            endpoints: EndpointTable::new(),
            journal: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn mount(&mut self, raw: u64, policy: Policy) -> EndpointHandle {
        self.endpoints.mount(TestField {
            id: id(raw),
            policy,
            shown: NumericValue::empty(),
            journal: self.journal.clone(),
        })
    }

    pub fn shown(&self, handle: EndpointHandle) -> Option<&str> {
        self.endpoints.get(handle).map(|f| f.shown.text.as_str())
    }

    /// Drain the journal, keeping only focus events.
    pub fn focus_events(&self) -> Vec<String> {
        self.journal
            .borrow_mut()
            .drain(..)
            .filter(|line| !line.contains(" apply "))
            .collect()
    }

    pub fn clear_journal(&self) {
        self.journal.borrow_mut().clear();
    }
}
