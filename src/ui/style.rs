use crate::models::{BadgeVariant, ChannelIcon};
use gtk4 as gtk;
use gtk4::prelude::*;

const CSS: &str = r#"
.badge {
    border-radius: 999px;
    padding: 1px 8px;
    font-size: 0.8em;
    font-weight: bold;
}
.badge-secondary { background: alpha(@window_fg_color, 0.1); }
.badge-destructive { background: @error_bg_color; color: @error_fg_color; }
.badge-warning { background: @warning_bg_color; color: @warning_fg_color; }
.badge-success { background: @success_bg_color; color: @success_fg_color; }
.badge-outline { border: 1px solid alpha(@window_fg_color, 0.25); }

.avatar {
    border-radius: 999px;
    background: alpha(@accent_bg_color, 0.2);
    font-weight: bold;
}
.brand-mark {
    border-radius: 8px;
    padding: 4px;
    background: @accent_bg_color;
    color: @accent_fg_color;
}

.bubble {
    border-radius: 12px;
    padding: 8px 14px;
}
.bubble-attendant { background: @accent_bg_color; color: @accent_fg_color; }
.bubble-patient { background: @card_bg_color; border: 1px solid alpha(@window_fg_color, 0.15); }

.queue-row:selected { background: alpha(@window_fg_color, 0.08); color: inherit; }

.presence-online { background: @success_color; border-radius: 999px; }
.presence-busy { background: @warning_color; border-radius: 999px; }
.presence-idle { background: alpha(@window_fg_color, 0.4); border-radius: 999px; }

.metric-value { font-size: 1.8em; font-weight: bold; }

.channel-whatsapp { color: #16a34a; }
.channel-instagram { color: #db2777; }
.channel-facebook { color: #2563eb; }
.channel-email { color: #4b5563; }
.channel-phone { color: #ea580c; }
.channel-default { color: @accent_color; }
"#;

pub fn install() {
    let Some(display) = gtk::gdk::Display::default() else {
        log::warn!("No display available, skipping stylesheet");
        return;
    };
    let provider = gtk::CssProvider::new();
    provider.load_from_data(CSS);
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

pub fn badge(text: &str, variant: BadgeVariant) -> gtk::Label {
    let lbl = gtk::Label::new(Some(text));
    lbl.add_css_class("badge");
    lbl.add_css_class(variant.css_class());
    lbl.set_valign(gtk::Align::Center);
    lbl
}

/// Shows the avatar image when one is configured and readable, otherwise the
/// name's initials.
pub fn avatar(name: &str, image: Option<&str>, size: i32) -> gtk::Widget {
    if let Some(path) = image.filter(|p| std::path::Path::new(p).exists()) {
        let img = gtk::Image::from_file(path);
        img.set_pixel_size(size);
        img.add_css_class("avatar");
        return img.upcast();
    }
    let lbl = gtk::Label::new(Some(&crate::utils::initials(name)));
    lbl.add_css_class("avatar");
    lbl.set_size_request(size, size);
    lbl.set_valign(gtk::Align::Center);
    lbl.upcast()
}

pub fn channel_icon(icon: ChannelIcon) -> gtk::Image {
    let img = gtk::Image::from_icon_name(icon.icon_name);
    img.add_css_class(icon.css_class);
    img
}

/// Flat button that does nothing yet.
pub fn inert_button(label: &str) -> gtk::Button {
    let btn = gtk::Button::with_label(label);
    btn.set_tooltip_text(Some("Em breve"));
    btn
}

pub fn icon_button(icon_name: &str) -> gtk::Button {
    let btn = gtk::Button::from_icon_name(icon_name);
    btn.add_css_class("flat");
    btn
}

pub fn clear_box(container: &gtk::Box) {
    while let Some(child) = container.first_child() {
        container.remove(&child);
    }
}

pub fn caption(text: &str) -> gtk::Label {
    let lbl = gtk::Label::new(Some(text));
    lbl.add_css_class("caption");
    lbl.add_css_class("dim-label");
    lbl.set_halign(gtk::Align::Start);
    lbl
}
