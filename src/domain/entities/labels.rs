//! Closed label sets shared by the persona and campaign entities.
//!
//! The backend stores every label as free text, so each enumeration keeps an
//! `Other` variant that carries unrecognised labels through unchanged.

macro_rules! define_label_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Label not known to this client, kept verbatim.
            Other(String),
        }

        impl $name {
            /// Known variants in display order.
            pub const KNOWN: &'static [Self] = &[$( Self::$variant ),+];

            /// Returns the wire label.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $label, )+
                    Self::Other(label) => label,
                }
            }

            /// Returns the following known variant, wrapping around.
            #[must_use]
            pub fn next(&self) -> Self {
                self.cycle(1)
            }

            /// Returns the preceding known variant, wrapping around.
            #[must_use]
            pub fn previous(&self) -> Self {
                self.cycle(Self::KNOWN.len() - 1)
            }

            fn cycle(&self, offset: usize) -> Self {
                match Self::KNOWN.iter().position(|known| known == self) {
                    Some(index) => Self::KNOWN[(index + offset) % Self::KNOWN.len()].clone(),
                    None => Self::KNOWN[0].clone(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $label => Self::$variant, )+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(label) => label,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_label_enum! {
    /// Content niche a persona publishes in.
    Niche {
        Tech => "Tech",
        Fashion => "Fashion",
        Fitness => "Fitness",
        Travel => "Travel",
        Gaming => "Gaming",
    }
}

define_label_enum! {
    /// Writing tone of a persona.
    Tone {
        Professional => "Professional",
        Witty => "Witty",
        Enthusiastic => "Enthusiastic",
        Calm => "Calm",
        Sarcastic => "Sarcastic",
    }
}

define_label_enum! {
    /// Presented gender of a persona.
    Gender {
        Female => "Female",
        Male => "Male",
        NonBinary => "Non-binary",
    }
}

define_label_enum! {
    /// Apparent age bracket of a persona.
    AgeRange {
        EighteenToTwentyFour => "18-24",
        TwentyFiveToThirty => "25-30",
        ThirtyToForty => "30-40",
        FortyPlus => "40+",
    }
}

define_label_enum! {
    /// Synthetic voice model used for video assets.
    Voice {
        A => "Voice A",
        B => "Voice B",
        C => "Voice C",
    }
}

define_label_enum! {
    /// Lifecycle state of a campaign.
    CampaignStatus {
        Active => "Active",
        Draft => "Draft",
        Completed => "Completed",
    }
}

impl Default for Niche {
    fn default() -> Self {
        Self::Tech
    }
}

impl Default for Tone {
    fn default() -> Self {
        Self::Professional
    }
}

impl Default for Gender {
    fn default() -> Self {
        Self::Female
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self::TwentyFiveToThirty
    }
}

impl Default for Voice {
    fn default() -> Self {
        Self::A
    }
}

impl Default for CampaignStatus {
    fn default() -> Self {
        Self::Draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Tech", Niche::Tech ; "tech")]
    #[test_case("Gaming", Niche::Gaming ; "gaming")]
    #[test_case("Cooking", Niche::Other("Cooking".to_string()) ; "unknown_niche")]
    fn test_niche_from_label(label: &str, expected: Niche) {
        assert_eq!(Niche::from(label), expected);
    }

    #[test]
    fn test_unknown_label_round_trips() {
        let tone: Tone = serde_json::from_str("\"Energetic\"").unwrap();
        assert_eq!(tone, Tone::Other("Energetic".to_string()));
        assert_eq!(serde_json::to_string(&tone).unwrap(), "\"Energetic\"");
    }

    #[test]
    fn test_known_label_serializes_as_wire_text() {
        assert_eq!(serde_json::to_string(&Gender::NonBinary).unwrap(), "\"Non-binary\"");
        assert_eq!(serde_json::to_string(&Voice::B).unwrap(), "\"Voice B\"");
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Voice::C.next(), Voice::A);
        assert_eq!(Voice::A.previous(), Voice::C);
        assert_eq!(AgeRange::FortyPlus.next(), AgeRange::EighteenToTwentyFour);
    }

    #[test]
    fn test_cycling_from_unknown_starts_at_first() {
        assert_eq!(Tone::Other("Energetic".into()).next(), Tone::Professional);
    }

    #[test]
    fn test_defaults_match_form() {
        assert_eq!(Niche::default(), Niche::Tech);
        assert_eq!(Tone::default(), Tone::Professional);
        assert_eq!(Gender::default(), Gender::Female);
        assert_eq!(AgeRange::default().as_str(), "25-30");
        assert_eq!(Voice::default().to_string(), "Voice A");
    }
}
