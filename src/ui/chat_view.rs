use crate::models::{ChannelIcon, Message, Patient, Sender};
use crate::state::ChatQueue;
use crate::ui::sidebar::Sidebar;
use crate::ui::style;
use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct ChatView;

impl ChatView {
    /// Builds a fresh queue view. Every call starts again from the seed data.
    pub fn new() -> gtk::Widget {
        let state = Rc::new(RefCell::new(ChatQueue::new()));

        let paned = gtk::Paned::new(gtk::Orientation::Horizontal);
        paned.set_shrink_start_child(false);
        paned.set_resize_start_child(false);

        let sidebar = Sidebar::new();
        {
            let q = state.borrow();
            sidebar.set_items(q.patients(), &q.selected_patient().id);
        }
        paned.set_start_child(Some(&sidebar.widget()));

        let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
        root.set_hexpand(true);

        // Conversation header
        let header = gtk::Box::new(gtk::Orientation::Horizontal, 12);
        header.set_margin_top(12);
        header.set_margin_bottom(12);
        header.set_margin_start(16);
        header.set_margin_end(16);
        let identity = gtk::Box::new(gtk::Orientation::Horizontal, 10);
        identity.set_hexpand(true);
        render_identity(&identity, state.borrow().selected_patient());
        header.append(&identity);
        let call_btn = gtk::Button::new();
        call_btn.set_child(Some(
            &adw::ButtonContent::builder()
                .icon_name("call-start-symbolic")
                .label("Ligar")
                .build(),
        ));
        call_btn.set_tooltip_text(Some("Em breve"));
        let resolve_btn = gtk::Button::new();
        resolve_btn.set_child(Some(
            &adw::ButtonContent::builder()
                .icon_name("object-select-symbolic")
                .label("Resolver")
                .build(),
        ));
        resolve_btn.add_css_class("suggested-action");
        resolve_btn.set_tooltip_text(Some("Em breve"));
        header.append(&call_btn);
        header.append(&style::inert_button("Transferir"));
        header.append(&resolve_btn);
        root.append(&header);
        root.append(&gtk::Separator::new(gtk::Orientation::Horizontal));

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .hscrollbar_policy(gtk::PolicyType::Never)
            .build();
        let messages_box = gtk::Box::new(gtk::Orientation::Vertical, 12);
        messages_box.set_margin_top(16);
        messages_box.set_margin_bottom(16);
        messages_box.set_margin_start(16);
        messages_box.set_margin_end(16);
        for message in state.borrow().messages() {
            messages_box.append(&bubble(message));
        }
        scroller.set_child(Some(&messages_box));
        root.append(&scroller);
        root.append(&gtk::Separator::new(gtk::Orientation::Horizontal));

        // Composer
        let composer = gtk::Box::new(gtk::Orientation::Vertical, 8);
        composer.set_margin_top(12);
        composer.set_margin_bottom(12);
        composer.set_margin_start(16);
        composer.set_margin_end(16);
        let input_row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        let entry = gtk::Entry::new();
        entry.set_hexpand(true);
        entry.set_placeholder_text(Some("Digite sua mensagem..."));
        let send_btn = gtk::Button::from_icon_name("mail-send-symbolic");
        send_btn.add_css_class("suggested-action");
        input_row.append(&entry);
        input_row.append(&send_btn);
        composer.append(&input_row);
        let shortcuts = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        for label in ["Respostas Rápidas", "Agendar Consulta", "Solicitar Exames"] {
            shortcuts.append(&style::inert_button(label));
        }
        composer.append(&shortcuts);
        root.append(&composer);

        paned.set_end_child(Some(&root));

        {
            let state = state.clone();
            entry.connect_changed(move |e| state.borrow_mut().set_draft(e.text().as_str()));
        }

        {
            let state = state.clone();
            let identity = identity.clone();
            sidebar.connect_selected(move |idx| {
                let mut q = state.borrow_mut();
                if q.select_at(idx) {
                    log::debug!("Selected patient {}", q.selected_patient().id);
                    render_identity(&identity, q.selected_patient());
                }
            });
        }

        // Send actions
        {
            let entry_for_send = entry.clone();
            let send: Rc<dyn Fn()> = Rc::new(move || {
                let Some(message) = state.borrow_mut().send().cloned() else {
                    return;
                };
                log::debug!("Sent message {} ({} chars)", message.id, message.content.chars().count());
                messages_box.append(&bubble(&message));
                entry_for_send.set_text("");
                let scroller = scroller.clone();
                glib::idle_add_local_once(move || {
                    let adj = scroller.vadjustment();
                    adj.set_value(adj.upper());
                });
            });
            {
                let send = send.clone();
                send_btn.connect_clicked(move |_| (send)());
            }
            {
                let send = send.clone();
                entry.connect_activate(move |_| (send)());
            }
        }

        paned.upcast()
    }
}

fn render_identity(container: &gtk::Box, patient: &Patient) {
    style::clear_box(container);
    container.append(&style::avatar(&patient.name, patient.avatar.as_deref(), 40));

    let text = gtk::Box::new(gtk::Orientation::Vertical, 2);
    text.set_valign(gtk::Align::Center);
    let name = gtk::Label::new(Some(&patient.name));
    name.add_css_class("heading");
    name.set_halign(gtk::Align::Start);
    text.append(&name);

    let meta = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    meta.append(&style::channel_icon(ChannelIcon::for_label(&patient.last_channel)));
    meta.append(&style::caption(&patient.last_channel));
    meta.append(&style::caption("•"));
    meta.append(&style::caption(&patient.phone));
    text.append(&meta);
    container.append(&text);
}

fn bubble(message: &Message) -> gtk::Widget {
    let from_attendant = message.sender == Sender::Attendant;

    let body = gtk::Box::new(gtk::Orientation::Vertical, 4);
    body.add_css_class("bubble");
    body.add_css_class(if from_attendant { "bubble-attendant" } else { "bubble-patient" });
    body.set_halign(if from_attendant { gtk::Align::End } else { gtk::Align::Start });

    let content = gtk::Label::new(Some(&message.content));
    content.set_wrap(true);
    content.set_max_width_chars(48);
    content.set_xalign(0.0);
    content.set_selectable(true);
    body.append(&content);

    let footer = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    let time = gtk::Label::new(Some(&message.timestamp));
    time.add_css_class("caption");
    time.set_opacity(0.7);
    time.set_hexpand(true);
    time.set_halign(gtk::Align::Start);
    if let Some(status) = message.status {
        time.set_tooltip_text(Some(status.label()));
    }
    footer.append(&time);
    if from_attendant {
        footer.append(&style::channel_icon(message.channel.icon()));
    }
    body.append(&footer);

    body.upcast()
}
