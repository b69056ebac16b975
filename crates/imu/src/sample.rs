use {
    crate::ParseError,
    std::{fmt, ops::Sub, str::FromStr},
};

pub const FIELD_SEPARATOR: char = '*';

/// One orientation reading, angles in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientationSample {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl OrientationSample {
    pub const fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }
}

// per-axis difference, used for deltas against the zero reference
impl Sub for OrientationSample {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.roll - rhs.roll, self.pitch - rhs.pitch, self.yaw - rhs.yaw)
    }
}

impl fmt::Display for OrientationSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Roll: {:.2}, Pitch: {:.2}, Yaw: {:.2}",
            self.roll, self.pitch, self.yaw
        )
    }
}

fn parse_angle(field: &str) -> Result<f64, ParseError> {
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidNumber(field.to_string())),
    }
}

/// Parses `roll*pitch*yaw`. Empty fields from leading, trailing or doubled
/// separators are ignored; exactly three numeric fields must remain.
impl FromStr for OrientationSample {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line
            .trim()
            .split(FIELD_SEPARATOR)
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .collect();
        let [roll, pitch, yaw] = fields.as_slice() else {
            return Err(ParseError::FieldCount(fields.len()));
        };
        Ok(Self::new(
            parse_angle(roll)?,
            parse_angle(pitch)?,
            parse_angle(yaw)?,
        ))
    }
}
