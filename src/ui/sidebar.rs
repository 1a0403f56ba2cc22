use crate::models::{ChannelIcon, Patient};
use crate::ui::style;
use gtk4 as gtk;
use gtk4::prelude::*;

/// The attendance queue: one row per patient, the selected one highlighted.
pub struct Sidebar {
    root: gtk::Box,
    count: gtk::Label,
    list: gtk::ListBox,
}

impl Sidebar {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
        root.set_width_request(320);

        let heading = gtk::Box::new(gtk::Orientation::Vertical, 2);
        heading.set_margin_top(12);
        heading.set_margin_bottom(12);
        heading.set_margin_start(12);
        heading.set_margin_end(12);
        let title = gtk::Label::new(Some("Fila de Atendimento"));
        title.add_css_class("heading");
        title.set_halign(gtk::Align::Start);
        let count = style::caption("");
        heading.append(&title);
        heading.append(&count);
        root.append(&heading);
        root.append(&gtk::Separator::new(gtk::Orientation::Horizontal));

        let list = gtk::ListBox::new();
        list.set_selection_mode(gtk::SelectionMode::Single);
        list.add_css_class("navigation-sidebar");
        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hscrollbar_policy(gtk::PolicyType::Never)
            .child(&list)
            .build();
        root.append(&scroller);

        Self { root, count, list }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn set_items(&self, patients: &[Patient], selected_id: &str) {
        while let Some(child) = self.list.first_child() {
            self.list.remove(&child);
        }
        self.count.set_label(&crate::utils::queue_caption(patients.len()));
        for patient in patients {
            let row = gtk::ListBoxRow::new();
            row.add_css_class("queue-row");
            row.set_tooltip_text(Some(patient.status.label()));
            row.set_child(Some(&patient_row(patient)));
            self.list.append(&row);
            if patient.id == selected_id {
                self.list.select_row(Some(&row));
            }
        }
    }

    /// Calls back with the row index whenever the selection moves, whether
    /// by click or keyboard.
    pub fn connect_selected<F: Fn(usize) + 'static>(&self, f: F) {
        self.list.connect_row_selected(move |_, row| {
            if let Some(idx) = row.and_then(|r| usize::try_from(r.index()).ok()) {
                f(idx);
            }
        });
    }
}

fn patient_row(patient: &Patient) -> gtk::Box {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 10);
    row.set_margin_top(10);
    row.set_margin_bottom(10);
    row.set_margin_start(8);
    row.set_margin_end(8);
    let avatar = style::avatar(&patient.name, patient.avatar.as_deref(), 40);
    avatar.set_valign(gtk::Align::Start);
    row.append(&avatar);

    let details = gtk::Box::new(gtk::Orientation::Vertical, 2);
    details.set_hexpand(true);

    let top = gtk::Box::new(gtk::Orientation::Horizontal, 4);
    let name = gtk::Label::new(Some(&patient.name));
    name.add_css_class("heading");
    name.set_halign(gtk::Align::Start);
    name.set_hexpand(true);
    name.set_ellipsize(gtk::pango::EllipsizeMode::End);
    top.append(&name);
    top.append(&style::channel_icon(ChannelIcon::for_label(&patient.last_channel)));
    top.append(&style::badge(patient.priority.label(), patient.priority.variant()));
    details.append(&top);

    details.append(&style::caption(&patient.phone));

    let bottom = gtk::Box::new(gtk::Orientation::Horizontal, 4);
    bottom.set_margin_top(4);
    let channel = style::caption(&patient.last_channel);
    channel.set_hexpand(true);
    bottom.append(&channel);
    let clock = gtk::Image::from_icon_name("alarm-symbolic");
    clock.add_css_class("dim-label");
    bottom.append(&clock);
    bottom.append(&style::caption(&patient.wait_time));
    details.append(&bottom);

    row.append(&details);
    row
}
