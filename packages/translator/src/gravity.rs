use serde::{Deserialize, Serialize};

/// Alignment of an element along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
    Stretch,
}

impl Align {
    /// CSS box-alignment keyword for this value.
    pub fn css_value(self) -> &'static str {
        match self {
            Align::Start => "start",
            Align::Center => "center",
            Align::End => "end",
            Align::Stretch => "stretch",
        }
    }
}

/// Two-axis alignment descriptor parsed from the mobile gravity vocabulary.
///
/// Components default to `Center` when unspecified. Axis selection is by
/// boolean so one value can answer "what is my alignment along axis X"
/// generically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Gravity {
    pub horizontal: Align,
    pub vertical: Align,
}

impl Gravity {
    pub fn new(horizontal: Align, vertical: Align) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Component along the requested axis (`true` = vertical).
    pub fn axis(self, vertical: bool) -> Align {
        if vertical {
            self.vertical
        } else {
            self.horizontal
        }
    }

    /// Parse a `|`-combined gravity value (`"bottom|end"`, `"center"`, ...).
    ///
    /// Unrecognized flags are ignored so vendor extensions degrade to the
    /// default rather than failing the translation.
    pub fn parse(value: &str) -> Self {
        let mut gravity = Gravity::default();
        for flag in value.split('|').map(str::trim) {
            match flag {
                "left" | "start" => gravity.horizontal = Align::Start,
                "right" | "end" => gravity.horizontal = Align::End,
                "top" => gravity.vertical = Align::Start,
                "bottom" => gravity.vertical = Align::End,
                "center" => {
                    gravity.horizontal = Align::Center;
                    gravity.vertical = Align::Center;
                }
                "center_horizontal" => gravity.horizontal = Align::Center,
                "center_vertical" => gravity.vertical = Align::Center,
                "fill" => {
                    gravity.horizontal = Align::Stretch;
                    gravity.vertical = Align::Stretch;
                }
                "fill_horizontal" => gravity.horizontal = Align::Stretch,
                "fill_vertical" => gravity.vertical = Align::Stretch,
                _ => {}
            }
        }
        gravity
    }
}
