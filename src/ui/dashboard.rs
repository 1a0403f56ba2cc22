use crate::dashboard::{channel_shares, total_messages};
use crate::models::{AttendantMetrics, DashboardSummary};
use crate::seed;
use crate::ui::style;
use gtk4 as gtk;
use gtk4::prelude::*;

pub struct ManagerDashboard;

impl ManagerDashboard {
    /// Everything here is recomputed from the seed tables on each build.
    pub fn new() -> gtk::Widget {
        let summary: &DashboardSummary = &seed::SUMMARY;

        let root = gtk::Box::new(gtk::Orientation::Vertical, 24);
        root.set_margin_top(24);
        root.set_margin_bottom(24);
        root.set_margin_start(24);
        root.set_margin_end(24);

        let overview = gtk::Box::new(gtk::Orientation::Horizontal, 24);
        overview.set_homogeneous(true);
        overview.append(&metric_card(
            "Mensagens Hoje",
            "mail-unread-symbolic",
            &total_messages(&seed::CHANNEL_STATS).to_string(),
            None,
            &format!("{} em relação a ontem", summary.message_trend),
        ));
        overview.append(&metric_card(
            "Tempo Médio Resposta",
            "alarm-symbolic",
            &summary.avg_response_time,
            None,
            &format!("{} melhoria no SLA", summary.sla_trend),
        ));
        let goal = if summary.goal_met() { "✓ Atingida" } else { "Não atingida" };
        overview.append(&metric_card(
            "Taxa Resolução",
            "object-select-symbolic",
            &format!("{}%", summary.resolution_rate),
            Some("success"),
            &format!("Meta: {}% {goal}", summary.resolution_goal),
        ));
        overview.append(&metric_card(
            "Satisfação",
            "starred-symbolic",
            &format!("{}/5", summary.satisfaction),
            Some("warning"),
            &format!("Baseado em {} avaliações", summary.review_count),
        ));
        root.append(&overview);

        let details = gtk::Box::new(gtk::Orientation::Horizontal, 24);
        details.set_homogeneous(true);
        details.append(&channel_card());
        details.append(&team_card(&seed::ATTENDANTS));
        root.append(&details);

        let actions = gtk::Box::new(gtk::Orientation::Horizontal, 12);
        let report = gtk::Button::new();
        report.set_child(Some(
            &adw::ButtonContent::builder()
                .icon_name("x-office-calendar-symbolic")
                .label("Relatório Completo")
                .build(),
        ));
        report.add_css_class("suggested-action");
        report.set_tooltip_text(Some("Em breve"));
        actions.append(&report);
        actions.append(&style::inert_button("Análise Detalhada"));
        let spacer = gtk::Box::new(gtk::Orientation::Horizontal, 0);
        spacer.set_hexpand(true);
        actions.append(&spacer);
        let alert = gtk::Image::from_icon_name("dialog-warning-symbolic");
        alert.add_css_class("warning");
        actions.append(&alert);
        actions.append(&style::caption(&format!(
            "{} atendimentos críticos pendentes",
            summary.critical_pending
        )));
        root.append(&actions);

        gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hscrollbar_policy(gtk::PolicyType::Never)
            .child(&root)
            .build()
            .upcast()
    }
}

fn card(title: &str, icon_name: &str) -> (gtk::Box, gtk::Box) {
    let card = gtk::Box::new(gtk::Orientation::Vertical, 12);
    card.add_css_class("card");
    let inner = gtk::Box::new(gtk::Orientation::Vertical, 12);
    inner.set_margin_top(16);
    inner.set_margin_bottom(16);
    inner.set_margin_start(16);
    inner.set_margin_end(16);

    let head = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    let lbl = gtk::Label::new(Some(title));
    lbl.add_css_class("heading");
    lbl.set_halign(gtk::Align::Start);
    lbl.set_hexpand(true);
    head.append(&lbl);
    let icon = gtk::Image::from_icon_name(icon_name);
    icon.add_css_class("dim-label");
    head.append(&icon);
    inner.append(&head);

    card.append(&inner);
    (card, inner)
}

fn metric_card(title: &str, icon_name: &str, value: &str, tone: Option<&str>, note: &str) -> gtk::Box {
    let (card, inner) = card(title, icon_name);
    let value = gtk::Label::new(Some(value));
    value.add_css_class("metric-value");
    value.add_css_class(tone.unwrap_or("accent"));
    value.set_halign(gtk::Align::Start);
    inner.append(&value);
    inner.append(&style::caption(note));
    card
}

fn channel_card() -> gtk::Box {
    let (card, inner) = card("Mensagens por Canal", "x-office-spreadsheet-symbolic");
    for share in channel_shares(&seed::CHANNEL_STATS) {
        let row = gtk::Box::new(gtk::Orientation::Vertical, 6);
        let line = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        line.append(&style::channel_icon(share.stat.icon()));
        let name = gtk::Label::new(Some(&share.stat.name));
        name.add_css_class("heading");
        name.set_hexpand(true);
        name.set_halign(gtk::Align::Start);
        line.append(&name);
        line.append(&gtk::Label::new(Some(&share.stat.messages.to_string())));
        line.append(&style::caption(&format!("({}%)", share.percent)));
        row.append(&line);

        let bar = gtk::ProgressBar::new();
        bar.set_fraction(f64::from(share.percent) / 100.0);
        row.append(&bar);
        inner.append(&row);
    }
    card
}

fn team_card(attendants: &[AttendantMetrics]) -> gtk::Box {
    let (card, inner) = card("Performance da Equipe", "system-users-symbolic");
    let list = gtk::ListBox::new();
    list.set_selection_mode(gtk::SelectionMode::None);
    list.add_css_class("boxed-list");
    for attendant in attendants {
        list.append(&attendant_row(attendant));
    }
    inner.append(&list);
    card
}

fn attendant_row(a: &AttendantMetrics) -> gtk::Box {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    row.set_widget_name(&format!("attendant-{}", a.id));
    row.set_margin_top(10);
    row.set_margin_bottom(10);
    row.set_margin_start(10);
    row.set_margin_end(10);

    let overlay = gtk::Overlay::new();
    overlay.set_child(Some(&style::avatar(&a.name, a.avatar.as_deref(), 40)));
    let dot = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    dot.set_size_request(12, 12);
    dot.set_halign(gtk::Align::End);
    dot.set_valign(gtk::Align::End);
    dot.add_css_class(a.status.dot_class());
    overlay.add_overlay(&dot);
    overlay.set_valign(gtk::Align::Center);
    row.append(&overlay);

    let info = gtk::Box::new(gtk::Orientation::Vertical, 2);
    info.set_hexpand(true);
    info.set_valign(gtk::Align::Center);
    let name = gtk::Label::new(Some(&a.name));
    name.add_css_class("heading");
    name.set_halign(gtk::Align::Start);
    info.append(&name);
    info.append(&style::caption(&format!(
        "Chats: {}    Resolvidos: {}    Tempo: {}",
        a.active_chats, a.resolved_today, a.avg_response_time
    )));
    row.append(&info);

    let side = gtk::Box::new(gtk::Orientation::Vertical, 4);
    side.set_valign(gtk::Align::Center);
    let badge = style::badge(a.status.label(), a.status.variant());
    badge.set_halign(gtk::Align::End);
    side.append(&badge);
    let score = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    let star = gtk::Image::from_icon_name("starred-symbolic");
    star.add_css_class("warning");
    score.append(&star);
    score.append(&gtk::Label::new(Some(&a.rating.to_string())));
    score.append(&style::caption("•"));
    let efficiency = gtk::Label::new(Some(&format!("{}%", a.efficiency)));
    efficiency.add_css_class("success");
    score.append(&efficiency);
    side.append(&score);
    row.append(&side);

    row
}
