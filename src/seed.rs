//! Built-in demo data. Everything the desk shows comes from here.

use crate::models::{
    AttendantMetrics, AttendantStatus, Channel, ChannelStat, DashboardSummary, Message,
    MessageStatus, Patient, PatientStatus, Priority, Sender,
};
use once_cell::sync::Lazy;

pub static PATIENTS: Lazy<Vec<Patient>> = Lazy::new(|| {
    vec![
        patient("1", "Maria Silva", "(11) 99999-9999", "WhatsApp", PatientStatus::Active, Priority::High, "5 min"),
        patient("2", "João Santos", "(11) 88888-8888", "Instagram", PatientStatus::Waiting, Priority::Medium, "12 min"),
        patient("3", "Ana Costa", "(11) 77777-7777", "Facebook", PatientStatus::Waiting, Priority::Low, "18 min"),
    ]
});

pub static MESSAGES: Lazy<Vec<Message>> = Lazy::new(|| {
    vec![
        message(
            "1",
            "Olá! Gostaria de agendar uma consulta com o cardiologista.",
            Sender::Patient,
            "14:30",
            MessageStatus::Read,
        ),
        message(
            "2",
            "Olá Maria! Claro, posso ajudá-la. Temos horários disponíveis para esta semana. Qual seria o melhor dia para você?",
            Sender::Attendant,
            "14:32",
            MessageStatus::Delivered,
        ),
        message(
            "3",
            "Seria possível na quinta-feira pela manhã?",
            Sender::Patient,
            "14:35",
            MessageStatus::Read,
        ),
    ]
});

pub static ATTENDANTS: Lazy<Vec<AttendantMetrics>> = Lazy::new(|| {
    vec![
        attendant("1", "Ana Costa", AttendantStatus::Online, 3, 24, "2m 15s", 4.8, 92),
        attendant("2", "Carlos Silva", AttendantStatus::Busy, 5, 18, "3m 42s", 4.6, 87),
        attendant("3", "Maria Santos", AttendantStatus::Online, 2, 31, "1m 58s", 4.9, 95),
    ]
});

pub static CHANNEL_STATS: Lazy<Vec<ChannelStat>> = Lazy::new(|| {
    [
        (Channel::WhatsApp, 145),
        (Channel::Instagram, 67),
        (Channel::Facebook, 89),
        (Channel::Email, 34),
        (Channel::Phone, 23),
    ]
    .into_iter()
    .map(|(channel, messages)| ChannelStat {
        name: channel.label().to_string(),
        messages,
        channel,
    })
    .collect()
});

pub static SUMMARY: Lazy<DashboardSummary> = Lazy::new(|| DashboardSummary {
    avg_response_time: "2m 38s".into(),
    resolution_rate: 94,
    resolution_goal: 90,
    satisfaction: 4.7,
    review_count: 127,
    message_trend: "+12%".into(),
    sla_trend: "-8%".into(),
    critical_pending: 2,
});

fn patient(
    id: &str,
    name: &str,
    phone: &str,
    last_channel: &str,
    status: PatientStatus,
    priority: Priority,
    wait_time: &str,
) -> Patient {
    Patient {
        id: id.into(),
        name: name.into(),
        avatar: None,
        phone: phone.into(),
        last_channel: last_channel.into(),
        status,
        priority,
        wait_time: wait_time.into(),
    }
}

fn message(id: &str, content: &str, sender: Sender, timestamp: &str, status: MessageStatus) -> Message {
    Message {
        id: id.into(),
        content: content.into(),
        sender,
        timestamp: timestamp.into(),
        channel: Channel::WhatsApp,
        status: Some(status),
    }
}

#[allow(clippy::too_many_arguments)]
fn attendant(
    id: &str,
    name: &str,
    status: AttendantStatus,
    active_chats: u32,
    resolved_today: u32,
    avg_response_time: &str,
    rating: f32,
    efficiency: u8,
) -> AttendantMetrics {
    AttendantMetrics {
        id: id.into(),
        name: name.into(),
        avatar: None,
        status,
        active_chats,
        resolved_today,
        avg_response_time: avg_response_time.into(),
        rating,
        efficiency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn unique<'a>(ids: impl Iterator<Item = &'a str>) -> bool {
        let mut seen = HashSet::new();
        ids.into_iter().all(|id| seen.insert(id))
    }

    #[test]
    fn ids_are_unique() {
        assert!(unique(PATIENTS.iter().map(|p| p.id.as_str())));
        assert!(unique(MESSAGES.iter().map(|m| m.id.as_str())));
        assert!(unique(ATTENDANTS.iter().map(|a| a.id.as_str())));
    }

    #[test]
    fn patient_channels_are_known() {
        for p in PATIENTS.iter() {
            assert!(Channel::from_label(&p.last_channel).is_some(), "{}", p.last_channel);
        }
    }

    #[test]
    fn metrics_stay_in_range() {
        for a in ATTENDANTS.iter() {
            assert!((0.0..=5.0).contains(&a.rating));
            assert!(a.efficiency <= 100);
        }
    }

    #[test]
    fn channel_names_follow_labels() {
        let names: Vec<_> = CHANNEL_STATS.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["WhatsApp", "Instagram", "Facebook", "E-mail", "Telefone"]);
    }
}
