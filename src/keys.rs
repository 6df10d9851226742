//! Remote-control key mapping for the Tizen TV browser.
//!
//! Only the six codes the dashboard cares about are mapped; everything else
//! is ignored. 10009 is the Samsung remote's Back/Return key.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoteKey {
    Left,
    Up,
    Right,
    Down,
    Enter,
    Back,
}

impl RemoteKey {
    pub fn label(self) -> &'static str {
        match self {
            RemoteKey::Left => "Left arrow",
            RemoteKey::Up => "Up arrow",
            RemoteKey::Right => "Right arrow",
            RemoteKey::Down => "Down arrow",
            RemoteKey::Enter => "Enter",
            RemoteKey::Back => "Back",
        }
    }
}

pub fn from_key_code(code: u32) -> Option<RemoteKey> {
    match code {
        37 => Some(RemoteKey::Left),
        38 => Some(RemoteKey::Up),
        39 => Some(RemoteKey::Right),
        40 => Some(RemoteKey::Down),
        13 => Some(RemoteKey::Enter),
        10009 => Some(RemoteKey::Back),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map() {
        assert_eq!(from_key_code(37), Some(RemoteKey::Left));
        assert_eq!(from_key_code(38), Some(RemoteKey::Up));
        assert_eq!(from_key_code(39), Some(RemoteKey::Right));
        assert_eq!(from_key_code(40), Some(RemoteKey::Down));
        assert_eq!(from_key_code(13), Some(RemoteKey::Enter));
        assert_eq!(from_key_code(10009), Some(RemoteKey::Back));
    }

    #[test]
    fn other_codes_ignored() {
        assert_eq!(from_key_code(0), None);
        assert_eq!(from_key_code(65), None);
        assert_eq!(from_key_code(10010), None);
    }
}
