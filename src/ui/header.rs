use crate::models::{BadgeVariant, CurrentUser, Role};
use crate::ui::style;
use gtk4 as gtk;
use gtk4::prelude::*;
use std::rc::Rc;

pub struct Header {
    bar: adw::HeaderBar,
    role_badge: gtk::Label,
    attendant_btn: gtk::Button,
    manager_btn: gtk::Button,
}

impl Header {
    pub fn new(user: &CurrentUser, on_role_change: Rc<dyn Fn(Role)>) -> Self {
        let bar = adw::HeaderBar::new();
        // Branding lives on the left, keep the centre empty.
        bar.set_title_widget(Some(&gtk::Box::new(gtk::Orientation::Horizontal, 0)));

        let brand = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        let mark = gtk::Image::from_icon_name("user-available-symbolic");
        mark.add_css_class("brand-mark");
        let title = gtk::Label::new(Some("MediaCare Omnichannel"));
        title.add_css_class("title-3");
        let role_badge = style::badge(user.role.label(), BadgeVariant::Outline);
        brand.append(&mark);
        brand.append(&title);
        brand.append(&role_badge);
        bar.pack_start(&brand);

        let attendant_btn = role_button("system-users-symbolic", Role::Attendant);
        let manager_btn = role_button("x-office-spreadsheet-symbolic", Role::Manager);
        for (btn, role) in [(&attendant_btn, Role::Attendant), (&manager_btn, Role::Manager)] {
            let on_role_change = on_role_change.clone();
            btn.connect_clicked(move |_| (on_role_change)(role));
        }
        let roles = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        roles.append(&attendant_btn);
        roles.append(&manager_btn);

        let identity = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        identity.append(&style::avatar(&user.name, user.avatar.as_deref(), 28));
        let name = gtk::Label::new(Some(&user.name));
        name.add_css_class("heading");
        identity.append(&name);

        // pack_end stacks right to left
        bar.pack_end(&style::icon_button("system-log-out-symbolic"));
        bar.pack_end(&identity);
        bar.pack_end(&style::icon_button("preferences-system-symbolic"));
        bar.pack_end(&style::icon_button("preferences-system-notifications-symbolic"));
        bar.pack_end(&roles);

        let header = Self {
            bar,
            role_badge,
            attendant_btn,
            manager_btn,
        };
        header.update(user);
        header
    }

    pub fn widget(&self) -> gtk::Widget {
        self.bar.clone().upcast()
    }

    pub fn update(&self, user: &CurrentUser) {
        self.role_badge.set_label(user.role.label());
        for (btn, role) in [(&self.attendant_btn, Role::Attendant), (&self.manager_btn, Role::Manager)] {
            if user.role == role {
                btn.add_css_class("suggested-action");
            } else {
                btn.remove_css_class("suggested-action");
            }
        }
    }
}

fn role_button(icon_name: &str, role: Role) -> gtk::Button {
    let content = adw::ButtonContent::builder()
        .icon_name(icon_name)
        .label(role.label())
        .build();
    let btn = gtk::Button::new();
    btn.set_child(Some(&content));
    btn
}
