use soroban_sdk::String;

pub const MAX_LABEL_LEN: u32 = 64;
pub const MAX_DESCRIPTION_LEN: u32 = 256;

// Item names and expiry dates: non-empty, bounded. Expiry is opaque text.
pub fn is_valid_label(label: &String) -> bool {
    label.len() > 0 && label.len() <= MAX_LABEL_LEN
}

// Purchase order descriptions may be empty
pub fn is_valid_description(description: &String) -> bool {
    description.len() <= MAX_DESCRIPTION_LEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_label_validation() {
        let env = Env::default();
        assert!(is_valid_label(&String::from_str(&env, "Aspirin")));
        assert!(is_valid_label(&String::from_str(&env, "2026-01-01")));
        assert!(!is_valid_label(&String::from_str(&env, "")));

        let long = [b'a'; 65];
        let too_long = String::from_bytes(&env, &long);
        assert!(!is_valid_label(&too_long));

        let exact = String::from_bytes(&env, &long[..64]);
        assert!(is_valid_label(&exact));
    }

    #[test]
    fn test_description_validation() {
        let env = Env::default();
        assert!(is_valid_description(&String::from_str(&env, "")));
        assert!(is_valid_description(&String::from_str(&env, "500 boxes, cold chain")));

        let long = [b'd'; 257];
        assert!(!is_valid_description(&String::from_bytes(&env, &long)));
    }
}
