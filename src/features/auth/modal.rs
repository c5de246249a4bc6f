//! Single dismissible message box.

/// Page elements backing the modal.
pub trait ModalSurface {
    fn set_message(&self, message: &str);
    fn set_modal_visible(&self, visible: bool);
}

/// Shows one message at a time; a new message replaces the current one.
#[derive(Clone)]
pub struct ModalNotifier<M> {
    surface: M,
}

impl<M: ModalSurface> ModalNotifier<M> {
    pub fn new(surface: M) -> Self {
        Self { surface }
    }

    pub fn show(&self, message: &str) {
        self.surface.set_message(message);
        self.surface.set_modal_visible(true);
    }

    pub fn dismiss(&self) {
        self.surface.set_modal_visible(false);
    }
}

#[cfg(test)]
mod tests {
    use super::{ModalNotifier, ModalSurface};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Overlay {
        state: Rc<RefCell<(String, bool)>>,
    }

    impl ModalSurface for Overlay {
        fn set_message(&self, message: &str) {
            self.state.borrow_mut().0 = message.to_string();
        }

        fn set_modal_visible(&self, visible: bool) {
            self.state.borrow_mut().1 = visible;
        }
    }

    #[test]
    fn show_then_dismiss() {
        let overlay = Overlay::default();
        let modal = ModalNotifier::new(overlay.clone());

        modal.show("hello");
        assert_eq!(*overlay.state.borrow(), ("hello".to_string(), true));

        modal.dismiss();
        assert!(!overlay.state.borrow().1);
    }

    #[test]
    fn last_message_wins() {
        let overlay = Overlay::default();
        let modal = ModalNotifier::new(overlay.clone());

        modal.show("first");
        modal.show("second");

        assert_eq!(*overlay.state.borrow(), ("second".to_string(), true));
    }
}
