//! Pomodoro countdown
//!
//! Tick-driven: the host calls [`PomodoroTimer::tick`] once a second and the
//! timer decides what, if anything, happened.

pub const DEFAULT_SESSION_SECS: u32 = 25 * 60;
pub const SESSION_COMPLETE_MESSAGE: &str = "Pomodoro session complete! Take a break.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Timer is paused, nothing changed
    Idle,
    /// One second elapsed
    Ticked { remaining: u32 },
    /// A running tick found the clock at zero; the timer stopped and rewound
    SessionComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PomodoroTimer {
    session_secs: u32,
    remaining: u32,
    running: bool,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_SECS)
    }
}

impl PomodoroTimer {
    pub fn new(session_secs: u32) -> Self {
        Self {
            session_secs,
            remaining: session_secs,
            running: false,
        }
    }

    pub fn from_minutes(minutes: u32) -> Self {
        Self::new(minutes.saturating_mul(60))
    }

    /// Returns false when already running
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.pause();
        self.remaining = self.session_secs;
    }

    pub fn tick(&mut self) -> TimerEvent {
        if !self.running {
            return TimerEvent::Idle;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
            TimerEvent::Ticked {
                remaining: self.remaining,
            }
        } else {
            self.running = false;
            self.remaining = self.session_secs;
            TimerEvent::SessionComplete
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn session_secs(&self) -> u32 {
        self.session_secs
    }

    /// `MM:SS`
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}
