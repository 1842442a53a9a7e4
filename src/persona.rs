/// Persona presets the server understands. The client never interprets
/// the key; it only ships it along with each message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona {
    pub key: &'static str,
    pub name: &'static str,
}

pub const PERSONAS: &[Persona] = &[
    Persona {
        key: "kind_ta",
        name: "Kind TA",
    },
    Persona {
        key: "cold_engineer",
        name: "Blunt Engineer",
    },
    Persona {
        key: "excited_friend",
        name: "Hyped Friend",
    },
];

#[derive(Debug)]
pub struct PersonaSelector {
    selected: usize,
}

impl PersonaSelector {
    /// Starts on the given key, or on the first preset when the key is
    /// unknown.
    pub fn new(default_key: &str) -> Self {
        let selected = PERSONAS
            .iter()
            .position(|p| p.key == default_key)
            .unwrap_or(0);
        Self { selected }
    }

    pub fn current(&self) -> Persona {
        PERSONAS[self.selected]
    }

    pub fn cycle(&mut self) {
        self.selected = (self.selected + 1) % PERSONAS.len();
    }
}
