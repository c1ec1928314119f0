use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown overlay option `{0}`")]
    UnknownOption(String),
    #[error("option `{key}` expects a boolean, got `{value}`")]
    InvalidBool { key: &'static str, value: String },
    #[error("option `{key}` has no choice `{value}`")]
    InvalidChoice { key: &'static str, value: String },
}

/// 2D box rendering style, selected by index from the UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxStyle {
    #[default]
    Outline,
    Glow,
    Corners,
    Wireframe,
}

impl BoxStyle {
    pub fn from_index(i: u8) -> Option<Self> {
        match i {
            0 => Some(Self::Outline),
            1 => Some(Self::Glow),
            2 => Some(Self::Corners),
            3 => Some(Self::Wireframe),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Where the tracer line starts on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TracerOrigin {
    #[default]
    BottomCenter,
    TopCenter,
    Cursor,
    ScreenCenter,
}

impl TracerOrigin {
    pub fn from_index(i: u8) -> Option<Self> {
        match i {
            0 => Some(Self::BottomCenter),
            1 => Some(Self::TopCenter),
            2 => Some(Self::Cursor),
            3 => Some(Self::ScreenCenter),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Every option the UI can write, keyed by the control's element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionKey {
    Box,
    BoxType,
    BoxFilled,
    BoxColor,
    BoxFillColor,
    Name,
    NameColor,
    Distance,
    DistanceColor,
    Health,
    Skeleton,
    SkeletonColor,
    Tracers,
    TracerColor,
    TracerStart,
    ChineseHat,
    ChineseHatColor,
}

impl OptionKey {
    pub const ALL: [OptionKey; 17] = [
        OptionKey::Box,
        OptionKey::BoxType,
        OptionKey::BoxFilled,
        OptionKey::BoxColor,
        OptionKey::BoxFillColor,
        OptionKey::Name,
        OptionKey::NameColor,
        OptionKey::Distance,
        OptionKey::DistanceColor,
        OptionKey::Health,
        OptionKey::Skeleton,
        OptionKey::SkeletonColor,
        OptionKey::Tracers,
        OptionKey::TracerColor,
        OptionKey::TracerStart,
        OptionKey::ChineseHat,
        OptionKey::ChineseHatColor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::Box => "box",
            OptionKey::BoxType => "boxType",
            OptionKey::BoxFilled => "boxFilled",
            OptionKey::BoxColor => "boxColor",
            OptionKey::BoxFillColor => "boxFillColor",
            OptionKey::Name => "name",
            OptionKey::NameColor => "nameColor",
            OptionKey::Distance => "distance",
            OptionKey::DistanceColor => "distanceColor",
            OptionKey::Health => "health",
            OptionKey::Skeleton => "skeleton",
            OptionKey::SkeletonColor => "skeletonColor",
            OptionKey::Tracers => "tracers",
            OptionKey::TracerColor => "tracerColor",
            OptionKey::TracerStart => "tracerStart",
            OptionKey::ChineseHat => "chineseHat",
            OptionKey::ChineseHatColor => "chineseHatColor",
        }
    }
}

impl FromStr for OptionKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OptionKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownOption(s.to_string()))
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overlay toggles, colors and choices. Colors are CSS strings and are
/// passed to the canvas unchecked.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayConfig {
    pub show_box: bool,
    pub box_style: BoxStyle,
    pub box_filled: bool,
    pub box_color: String,
    pub box_fill_color: String,
    pub show_name: bool,
    pub name_color: String,
    pub show_distance: bool,
    pub distance_color: String,
    pub show_health: bool,
    pub show_skeleton: bool,
    pub skeleton_color: String,
    pub show_tracers: bool,
    pub tracer_color: String,
    pub tracer_origin: TracerOrigin,
    pub show_hat: bool,
    pub hat_color: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            show_box: true,
            box_style: BoxStyle::Outline,
            box_filled: false,
            box_color: "#7b68ee".into(),
            box_fill_color: "#7b68ee".into(),
            show_name: true,
            name_color: "#ffffff".into(),
            show_distance: true,
            distance_color: "#aaaaaa".into(),
            show_health: true,
            show_skeleton: true,
            skeleton_color: "#ffffff".into(),
            show_tracers: true,
            tracer_color: "#7b68ee".into(),
            tracer_origin: TracerOrigin::BottomCenter,
            show_hat: false,
            hat_color: "#ffffff".into(),
        }
    }
}

impl OverlayConfig {
    /// Write an option by its UI id. Unknown ids are ignored (`Ok(false)`);
    /// malformed values leave the option unchanged.
    pub fn set(&mut self, key: &str, raw: &str) -> Result<bool, ConfigError> {
        match key.parse::<OptionKey>() {
            Ok(k) => self.set_option(k, raw).map(|()| true),
            Err(_) => {
                log::debug!("[config] ignoring unknown option `{}`", key);
                Ok(false)
            }
        }
    }

    pub fn set_option(&mut self, key: OptionKey, raw: &str) -> Result<(), ConfigError> {
        if let Some(flag) = self.flag_mut(key) {
            *flag = parse_bool(key, raw)?;
            return Ok(());
        }
        if let Some(color) = self.color_mut(key) {
            *color = raw.trim().to_string();
            return Ok(());
        }
        let choice = || ConfigError::InvalidChoice {
            key: key.as_str(),
            value: raw.to_string(),
        };
        let index: u8 = raw.trim().parse().map_err(|_| choice())?;
        match key {
            OptionKey::BoxType => self.box_style = BoxStyle::from_index(index).ok_or_else(choice)?,
            OptionKey::TracerStart => {
                self.tracer_origin = TracerOrigin::from_index(index).ok_or_else(choice)?
            }
            _ => return Err(choice()),
        }
        Ok(())
    }

    /// Flip a boolean option (checkbox semantics). `None` if `key` is not
    /// a known boolean option.
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        let k = key.parse::<OptionKey>().ok()?;
        let flag = self.flag_mut(k)?;
        *flag = !*flag;
        Some(*flag)
    }

    /// String form of an option, as the UI would display it.
    pub fn get(&self, key: &str) -> Option<String> {
        let k = key.parse::<OptionKey>().ok()?;
        Some(match k {
            OptionKey::Box => self.show_box.to_string(),
            OptionKey::BoxType => self.box_style.index().to_string(),
            OptionKey::BoxFilled => self.box_filled.to_string(),
            OptionKey::BoxColor => self.box_color.clone(),
            OptionKey::BoxFillColor => self.box_fill_color.clone(),
            OptionKey::Name => self.show_name.to_string(),
            OptionKey::NameColor => self.name_color.clone(),
            OptionKey::Distance => self.show_distance.to_string(),
            OptionKey::DistanceColor => self.distance_color.clone(),
            OptionKey::Health => self.show_health.to_string(),
            OptionKey::Skeleton => self.show_skeleton.to_string(),
            OptionKey::SkeletonColor => self.skeleton_color.clone(),
            OptionKey::Tracers => self.show_tracers.to_string(),
            OptionKey::TracerColor => self.tracer_color.clone(),
            OptionKey::TracerStart => self.tracer_origin.index().to_string(),
            OptionKey::ChineseHat => self.show_hat.to_string(),
            OptionKey::ChineseHatColor => self.hat_color.clone(),
        })
    }

    fn flag_mut(&mut self, key: OptionKey) -> Option<&mut bool> {
        match key {
            OptionKey::Box => Some(&mut self.show_box),
            OptionKey::BoxFilled => Some(&mut self.box_filled),
            OptionKey::Name => Some(&mut self.show_name),
            OptionKey::Distance => Some(&mut self.show_distance),
            OptionKey::Health => Some(&mut self.show_health),
            OptionKey::Skeleton => Some(&mut self.show_skeleton),
            OptionKey::Tracers => Some(&mut self.show_tracers),
            OptionKey::ChineseHat => Some(&mut self.show_hat),
            _ => None,
        }
    }

    fn color_mut(&mut self, key: OptionKey) -> Option<&mut String> {
        match key {
            OptionKey::BoxColor => Some(&mut self.box_color),
            OptionKey::BoxFillColor => Some(&mut self.box_fill_color),
            OptionKey::NameColor => Some(&mut self.name_color),
            OptionKey::DistanceColor => Some(&mut self.distance_color),
            OptionKey::SkeletonColor => Some(&mut self.skeleton_color),
            OptionKey::TracerColor => Some(&mut self.tracer_color),
            OptionKey::ChineseHatColor => Some(&mut self.hat_color),
            _ => None,
        }
    }
}

fn parse_bool(key: OptionKey, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim() {
        "true" | "1" | "on" => Ok(true),
        "false" | "0" | "off" => Ok(false),
        other => Err(ConfigError::InvalidBool {
            key: key.as_str(),
            value: other.to_string(),
        }),
    }
}
