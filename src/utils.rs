/// Avatar fallback text: first two characters of the name, uppercased.
pub fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

pub fn queue_caption(count: usize) -> String {
    format!("{count} pacientes aguardando")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_two_chars() {
        assert_eq!(initials("Maria Silva"), "MA");
        assert_eq!(initials("Dr. Ana Silva"), "DR");
        assert_eq!(initials("ágata"), "ÁG");
        assert_eq!(initials("J"), "J");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn caption_counts_patients() {
        assert_eq!(queue_caption(3), "3 pacientes aguardando");
    }
}
