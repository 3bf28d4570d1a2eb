use input_core::{FieldId, NumericValue};
use input_policy::Policy;

/// What the rendering layer exposes for one mounted field.
pub trait FieldEndpoint {
    fn id(&self) -> FieldId;

    fn input_policy(&self) -> &Policy;

    /// Display a new value.
    fn apply(&mut self, value: &NumericValue);

    fn become_active(&mut self);

    fn resign_active(&mut self);
}

/// Non-owning reference into an [`EndpointTable`].
///
/// A handle goes stale once its endpoint is unmounted; resolving it then
/// yields `None` even if the slot was reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EndpointHandle {
    index: u32,
    generation: u32,
}

impl EndpointHandle {
    #[inline]
    pub fn index(self) -> u32 {
        self.index
    }

    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug)]
struct Slot<E> {
    generation: u32,
    endpoint: Option<E>,
}

/// Generation-checked arena of mounted endpoints.
///
/// Owned by the integrator; hosts only keep [`EndpointHandle`]s and borrow
/// the table for the duration of one call.
#[derive(Debug)]
pub struct EndpointTable<E> {
    slots: Vec<Slot<E>>,
    free: Vec<u32>,
    mounted: usize,
}

impl<E> Default for EndpointTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EndpointTable<E> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            mounted: 0,
        }
    }

    pub fn mount(&mut self, endpoint: E) -> EndpointHandle {
        self.mounted += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.endpoint = Some(endpoint);
            return EndpointHandle {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            endpoint: Some(endpoint),
        });
        EndpointHandle {
            index,
            generation: 0,
        }
    }

    /// Remove the endpoint behind `handle`. Every copy of the handle goes stale.
    pub fn unmount(&mut self, handle: EndpointHandle) -> Option<E> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let endpoint = slot.endpoint.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.mounted -= 1;
        Some(endpoint)
    }

    pub fn get(&self, handle: EndpointHandle) -> Option<&E> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.endpoint.as_ref())
    }

    pub fn get_mut(&mut self, handle: EndpointHandle) -> Option<&mut E> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.endpoint.as_mut())
    }

    #[inline]
    pub fn is_mounted(&self, handle: EndpointHandle) -> bool {
        self.get(handle).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mounted
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mounted == 0
    }
}
