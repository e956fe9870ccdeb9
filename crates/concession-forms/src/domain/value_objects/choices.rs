//! Select-backed form choices
//!
//! Each enum maps one-to-one onto the values the form's dropdowns submit.
//! The wire string is what gets persisted and posted to the workflow.

use serde::{Deserialize, Serialize};

/// A single option of a select field, as rendered by clients
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => ($value:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire value submitted by the form
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value, )+
                }
            }

            /// Human readable label
            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            pub fn options() -> Vec<ChoiceOption> {
                Self::ALL
                    .iter()
                    .map(|c| ChoiceOption { value: c.as_str(), label: c.label() })
                    .collect()
            }
        }

        impl std::str::FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL.iter().copied().find(|c| c.as_str() == s).ok_or(())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum! {
    Gender {
        Male => ("male", "Male"),
        Female => ("female", "Female"),
    }
}

choice_enum! {
    Course {
        BTech => ("B TECH", "B TECH"),
        BTechIntegrated => ("B TECH (INTEGRATED)", "B TECH (INTEGRATED)"),
        MbaTech => ("MBA TECH", "MBA TECH"),
        Mca => ("MCA", "MCA"),
        MTech => ("M TECH", "M TECH"),
    }
}

choice_enum! {
    Stream {
        ArtificialIntelligence => ("ARTIFICIAL INTELLIGENCE", "ARTIFICIAL INTELLIGENCE"),
        Civil => ("CIVIL", "CIVIL"),
        ComputerEngineering => ("COMPUTER ENGINEERING", "COMPUTER ENGINEERING"),
        CsBusinessSystems => (
            "COMPUTER SCIENCE & BUSINESS SYSTEMS",
            "COMPUTER SCIENCE & BUSINESS SYSTEMS"
        ),
        CsDataScience => (
            "COMPUTER SCIENCE & ENGINEERING DATA SCIENCE (311)",
            "COMPUTER SCIENCE & ENGINEERING DATA SCIENCE (311)"
        ),
        CyberSecurity => ("CYBER SECURITY", "CYBER SECURITY"),
        DataScience => ("DATA SCIENCE", "DATA SCIENCE"),
        Extc => ("ELECTRONICS & TELECOMMUNICATION", "ELECTRONICS & TELECOMMUNICATION"),
        InformationTechnology => ("INFORMATION TECHNOLOGY", "INFORMATION TECHNOLOGY"),
        Mechanical => ("MECHANICAL", "MECHANICAL"),
        Mechatronics => ("MECHATRONICS", "MECHATRONICS"),
        Mca => ("MCA", "MCA"),
    }
}

choice_enum! {
    /// Year of study
    StudyYear {
        First => ("1", "1"),
        Second => ("2", "2"),
        Third => ("3", "3"),
        Fourth => ("4", "4"),
        Fifth => ("5", "5"),
        Sixth => ("6", "6"),
    }
}

choice_enum! {
    /// Travel class printed on the pass
    PassClass {
        First => ("first", "First"),
        Second => ("second", "Second"),
    }
}

choice_enum! {
    PassPeriod {
        Monthly => ("monthly", "Monthly"),
        Quarterly => ("quarterly", "Quarterly"),
    }
}

choice_enum! {
    RailwayType {
        Central => ("central", "Central"),
        Western => ("western", "Western"),
        Harbor => ("harbor", "Harbor"),
    }
}

choice_enum! {
    /// Collection window on a given date
    Timeslot {
        LateMorning => ("11.00 AM TO 12.00 PM", "11.00 AM TO 12.00 PM"),
        Noon => ("12.00 PM TO 1.00 PM", "12.00 PM TO 1.00 PM"),
        EarlyAfternoon => ("2.00 PM TO 3.00 PM", "2.00 PM TO 3.00 PM"),
        LateAfternoon => ("3.00 PM TO 4.00 PM", "3.00 PM TO 4.00 PM"),
    }
}
