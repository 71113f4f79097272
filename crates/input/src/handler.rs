//! DAS/ARR cursor handler for terminal environments.
//!
//! Holding a direction moves the cursor once, then repeats after the DAS
//! delay at the ARR rate. Both axes repeat independently so diagonals work.
//! Terminals that never send key releases are handled with a timeout.

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use crate::types::{InventoryAction, DEFAULT_ARR_MS, DEFAULT_DAS_MS};

/// Held direction on one axis: -1, 0 or +1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct AxisState {
    dir: i8,
    das_timer: u32,
    arr_accumulator: u32,
}

impl AxisState {
    fn press(&mut self, dir: i8) -> bool {
        if self.dir == dir {
            return false;
        }
        *self = AxisState {
            dir,
            ..AxisState::default()
        };
        true
    }

    fn release(&mut self, dir: i8) {
        if self.dir == dir {
            *self = AxisState::default();
        }
    }

    /// Advance timers; returns the number of repeats due.
    fn update(&mut self, elapsed_ms: u32, das: u32, arr: u32) -> u32 {
        if self.dir == 0 {
            self.das_timer = 0;
            self.arr_accumulator = 0;
            return 0;
        }

        let prev_das = self.das_timer;
        self.das_timer = self.das_timer.saturating_add(elapsed_ms);
        if self.das_timer < das {
            return 0;
        }

        let excess = if prev_das < das {
            self.das_timer - das
        } else {
            elapsed_ms
        };
        self.arr_accumulator += excess;

        let arr = arr.max(1);
        let repeats = self.arr_accumulator / arr;
        self.arr_accumulator %= arr;
        repeats
    }
}

/// Tracks held cursor keys for DAS/ARR handling.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: AxisState,
    vertical: AxisState,
    last_key_time: std::time::Instant,
    das_delay: u32,
    arr_rate: u32,
    key_release_timeout_ms: u32,
}

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that triggers DAS/ARR repeats.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

// Upper bound on repeats emitted by one update.
const MAX_REPEATS: usize = 32;

fn direction(code: KeyCode) -> Option<(bool, i8)> {
    // (is_horizontal, sign)
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some((true, -1))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some((true, 1))
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some((false, -1))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some((false, 1))
        }
        _ => None,
    }
}

fn action_for(horizontal: bool, dir: i8) -> Option<InventoryAction> {
    match (horizontal, dir) {
        (true, -1) => Some(InventoryAction::CursorLeft),
        (true, 1) => Some(InventoryAction::CursorRight),
        (false, -1) => Some(InventoryAction::CursorUp),
        (false, 1) => Some(InventoryAction::CursorDown),
        _ => None,
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            horizontal: AxisState::default(),
            vertical: AxisState::default(),
            last_key_time: std::time::Instant::now(),
            das_delay,
            arr_rate,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Returns the immediate cursor move for a newly pressed direction key.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<InventoryAction> {
        let (horizontal, dir) = direction(code)?;
        self.last_key_time = std::time::Instant::now();
        let axis = if horizontal {
            &mut self.horizontal
        } else {
            &mut self.vertical
        };
        if axis.press(dir) {
            action_for(horizontal, dir)
        } else {
            None
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match direction(code) {
            Some((true, dir)) => self.horizontal.release(dir),
            Some((false, dir)) => self.vertical.release(dir),
            None => {}
        }
    }

    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<InventoryAction, MAX_REPEATS> {
        let mut actions = ArrayVec::<InventoryAction, MAX_REPEATS>::new();

        // Auto-release when terminal does not emit release events.
        let time_since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if time_since_last_key > self.key_release_timeout_ms {
            self.horizontal = AxisState::default();
            self.vertical = AxisState::default();
        }

        for (horizontal, axis) in [(true, &mut self.horizontal), (false, &mut self.vertical)] {
            let repeats = axis.update(elapsed_ms, self.das_delay, self.arr_rate);
            if let Some(action) = action_for(horizontal, axis.dir) {
                for _ in 0..repeats {
                    let _ = actions.try_push(action);
                }
            }
        }

        actions
    }

    pub fn reset(&mut self) {
        self.horizontal = AxisState::default();
        self.vertical = AxisState::default();
        self.last_key_time = std::time::Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
