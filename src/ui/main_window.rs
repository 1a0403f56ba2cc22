use crate::app::AppSettings;
use crate::models::Role;
use crate::state::{ActiveView, RootState};
use crate::ui::chat_view::ChatView;
use crate::ui::dashboard::ManagerDashboard;
use crate::ui::header::Header;
use adw::Application;
use adw::prelude::*;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub fn show_main_window(app: &Application, settings: &AppSettings) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("MediaCare Omnichannel")
        .default_width(settings.window_width)
        .default_height(settings.window_height)
        .build();

    let state = Rc::new(RefCell::new(RootState::new(settings.current_user())));
    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    content.set_vexpand(true);

    // The header owns the callback, so the callback only holds a weak handle
    // back to it. The window keeps the strong one until it is destroyed.
    let header: Rc<RefCell<Option<Header>>> = Rc::new(RefCell::new(None));
    let on_role_change: Rc<dyn Fn(Role)> = {
        let state = state.clone();
        let header = Rc::downgrade(&header);
        let content = content.clone();
        Rc::new(move |role| {
            if !state.borrow_mut().set_role(role) {
                return;
            }
            let st = state.borrow();
            log::debug!("Switched to {}", role.label());
            with_live(&header, |header| header.update(st.user()));
            mount(&content, st.active_view());
        })
    };

    let bar = Header::new(state.borrow().user(), on_role_change);
    container.append(&bar.widget());
    *header.borrow_mut() = Some(bar);
    window.connect_destroy(move |_| {
        header.borrow_mut().take();
    });

    mount(&content, state.borrow().active_view());
    container.append(&content);
    window.set_content(Some(&container));
    window.present();
}

/// Drops whatever view is showing and builds the one for `view`.
fn mount(content: &gtk4::Box, view: ActiveView) {
    crate::ui::style::clear_box(content);
    let child = match view {
        ActiveView::ChatQueue => ChatView::new(),
        ActiveView::Dashboard => ManagerDashboard::new(),
    };
    child.set_vexpand(true);
    content.append(&child);
}

/// Runs `f` on the slot's value if its owner is still around.
fn with_live<T>(slot: &Weak<RefCell<Option<T>>>, f: impl FnOnce(&T)) -> bool {
    let Some(slot) = slot.upgrade() else {
        return false;
    };
    let guard = slot.borrow();
    match guard.as_ref() {
        Some(value) => {
            f(value);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn callback_handle_does_not_keep_the_owner_alive() {
        let owner = Rc::new(RefCell::new(Some(7)));
        let handle = Rc::downgrade(&owner);
        let seen = Cell::new(0);

        assert_eq!(Rc::strong_count(&owner), 1);
        assert!(with_live(&handle, |v| seen.set(*v)));
        assert_eq!(seen.get(), 7);

        drop(owner);
        assert!(!with_live(&handle, |_| panic!("owner is gone")));
    }

    #[test]
    fn empty_slot_is_skipped() {
        let owner: Rc<RefCell<Option<u8>>> = Rc::new(RefCell::new(None));
        assert!(!with_live(&Rc::downgrade(&owner), |_| panic!("nothing to update")));
    }
}
