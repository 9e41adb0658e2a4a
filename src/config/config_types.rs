// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnimationConfig {
    pub angular_velocity: f32, // 1.0 == 90 deg of joint rotation per second
    pub idle_timeout_ms: f32,  // idle time before an automatic morph
    pub y_spin: f32,
    pub z_spin: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StyleConfig {
    pub explode: f32, // gap between adjacent pieces
    pub titles: bool,
    pub authentic: bool,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub models_file: Option<String>,
}
