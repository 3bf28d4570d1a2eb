use input_core::FieldId;
use std::fmt;

/// An app hook for one focus event. Returns `true` when it handled the event,
/// which suppresses the host's default behavior.
pub type OverrideHook = Box<dyn FnMut(FieldId) -> bool>;

/// Per-field hooks consulted before the host's default focus behavior.
#[derive(Default)]
pub struct OverrideActions {
    pub on_next: Option<OverrideHook>,
    pub on_prev: Option<OverrideHook>,
    pub on_done: Option<OverrideHook>,
    pub on_become_active: Option<OverrideHook>,
    pub on_resign_active: Option<OverrideHook>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HookKind {
    Next,
    Prev,
    Done,
    BecomeActive,
    ResignActive,
}

impl OverrideActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_next(mut self, hook: impl FnMut(FieldId) -> bool + 'static) -> Self {
        self.on_next = Some(Box::new(hook));
        self
    }

    pub fn on_prev(mut self, hook: impl FnMut(FieldId) -> bool + 'static) -> Self {
        self.on_prev = Some(Box::new(hook));
        self
    }

    pub fn on_done(mut self, hook: impl FnMut(FieldId) -> bool + 'static) -> Self {
        self.on_done = Some(Box::new(hook));
        self
    }

    pub fn on_become_active(mut self, hook: impl FnMut(FieldId) -> bool + 'static) -> Self {
        self.on_become_active = Some(Box::new(hook));
        self
    }

    pub fn on_resign_active(mut self, hook: impl FnMut(FieldId) -> bool + 'static) -> Self {
        self.on_resign_active = Some(Box::new(hook));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.on_next.is_none()
            && self.on_prev.is_none()
            && self.on_done.is_none()
            && self.on_become_active.is_none()
            && self.on_resign_active.is_none()
    }

    /// Run one hook; `false` when it is not set.
    pub(crate) fn run(&mut self, kind: HookKind, id: FieldId) -> bool {
        let hook = match kind {
            HookKind::Next => &mut self.on_next,
            HookKind::Prev => &mut self.on_prev,
            HookKind::Done => &mut self.on_done,
            HookKind::BecomeActive => &mut self.on_become_active,
            HookKind::ResignActive => &mut self.on_resign_active,
        };
        hook.as_mut().is_some_and(|hook| hook(id))
    }
}

impl fmt::Debug for OverrideActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverrideActions")
            .field("on_next", &self.on_next.is_some())
            .field("on_prev", &self.on_prev.is_some())
            .field("on_done", &self.on_done.is_some())
            .field("on_become_active", &self.on_become_active.is_some())
            .field("on_resign_active", &self.on_resign_active.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn run_reports_whether_hook_handled() {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let mut actions = OverrideActions::new().on_next(move |_| {
            seen.set(seen.get() + 1);
            true
        });
        let id = FieldId::from_raw(7);

        assert!(actions.run(HookKind::Next, id));
        assert!(!actions.run(HookKind::Prev, id));
        assert_eq!(calls.get(), 1);
        assert!(!actions.is_empty());
        assert!(OverrideActions::new().is_empty());
    }

    #[test]
    fn debug_lists_set_hooks() {
        let actions = OverrideActions::new().on_done(|_| false);
        let text = format!("{actions:?}");
        assert!(text.contains("on_done: true"), "{text}");
        assert!(text.contains("on_next: false"), "{text}");
    }
}
