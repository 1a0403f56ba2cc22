use crate::models::ChannelStat;

pub fn total_messages(stats: &[ChannelStat]) -> u32 {
    stats.iter().map(|c| c.messages).sum()
}

/// Share of `messages` in `total`, rounded to the nearest whole percent.
pub fn percentage(messages: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(messages) / f64::from(total) * 100.0).round() as u32
}

/// One row of the "Mensagens por Canal" card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelShare<'a> {
    pub stat: &'a ChannelStat,
    pub percent: u32,
}

pub fn channel_shares(stats: &[ChannelStat]) -> Vec<ChannelShare<'_>> {
    let total = total_messages(stats);
    stats
        .iter()
        .map(|stat| ChannelShare {
            stat,
            percent: percentage(stat.messages, total),
        })
        .collect()
}
