use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LerpSettings {
    /// Blend units per second.
    pub speed: f32,
    /// Bounce between the ends instead of stopping.
    pub looping: bool,
    /// Start at 1 and run towards 0.
    pub reverse: bool,
    pub auto_play: bool,
    /// Seconds to wait before auto play starts.
    pub delay: f32,
}

impl Default for LerpSettings {
    fn default() -> Self {
        Self {
            speed: 0.5,
            looping: true,
            reverse: false,
            auto_play: true,
            delay: 0.0,
        }
    }
}

/// 0..1 blend value driven by `step(dt)`.
#[derive(Clone, Debug)]
pub struct LerpAnimator {
    settings: LerpSettings,
    value: f32,
    direction: f32,
    delay_timer: f32,
    playing: bool,
}

impl LerpAnimator {
    pub fn new(settings: LerpSettings) -> Self {
        let mut this = Self {
            settings,
            value: 0.0,
            direction: 1.0,
            delay_timer: 0.0,
            playing: false,
        };
        this.rewind();
        if settings.auto_play {
            if settings.delay > 0.0 {
                this.delay_timer = settings.delay;
            } else {
                this.playing = true;
            }
        }
        this
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn settings(&self) -> &LerpSettings {
        &self.settings
    }

    /// Advance by `dt` seconds and return the current value.
    pub fn step(&mut self, dt: f32) -> f32 {
        if self.delay_timer > 0.0 {
            self.delay_timer -= dt;
            if self.delay_timer <= 0.0 {
                self.delay_timer = 0.0;
                self.playing = true;
            }
            return self.value;
        }
        if !self.playing {
            return self.value;
        }

        self.value += self.direction * self.settings.speed * dt;
        let hit_end = if self.value >= 1.0 {
            self.value = 1.0;
            true
        } else if self.value <= 0.0 {
            self.value = 0.0;
            true
        } else {
            false
        };
        if hit_end {
            if self.settings.looping {
                self.direction = -self.direction;
            } else {
                self.playing = false;
            }
        }
        self.value
    }

    pub fn play(&mut self) {
        self.playing = true;
        self.delay_timer = 0.0;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Halt and return to the start value. The play direction is kept, so a
    /// looping animator stopped on its way back resumes heading back.
    pub fn stop(&mut self) {
        self.playing = false;
        self.value = self.start_value();
    }

    pub fn restart(&mut self) {
        self.rewind();
        self.play();
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    fn start_value(&self) -> f32 {
        if self.settings.reverse {
            1.0
        } else {
            0.0
        }
    }

    fn rewind(&mut self) {
        self.value = self.start_value();
        self.direction = if self.settings.reverse { -1.0 } else { 1.0 };
    }
}
