//! Lock-event classification and the guideline scoring tables.
//!
//! A lock produces a [`LockEvent`] describing what the lock did: lines
//! cleared, spin classification, combo index, back-to-back and all-clear.
//! The driver turns the event into action text; the engine turns it into
//! points here. Point values follow the standard guideline tables and are
//! an independently-testable policy, not behavior inferred from callers.

/// What a single lock did. Returned from `tick`/`key_down` so the driver
/// never gets called back from inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    /// 0..=4 rows completed by this lock.
    pub lines_cleared: u32,
    /// Streak index: 0 for the first clearing lock of a streak.
    pub combo: u32,
    /// Both this clearing lock and the previous one were difficult.
    pub back_to_back: bool,
    /// Board has no filled cells once the cleared rows are removed.
    pub all_clear: bool,
    /// Full spin (T piece corner test).
    pub spin: bool,
    /// Mini spin.
    pub mini_spin: bool,
}

impl LockEvent {
    /// Clear name, empty for a zero-line lock.
    pub fn clear_name(&self) -> &'static str {
        match self.lines_cleared {
            1 => "Single",
            2 => "Double",
            3 => "Triple",
            4 => "Quad",
            _ => "",
        }
    }

    /// Difficult clears keep the back-to-back chain alive: a Quad or any
    /// spin that clears at least one line.
    pub fn is_difficult(&self) -> bool {
        self.lines_cleared == 4 || ((self.spin || self.mini_spin) && self.lines_cleared > 0)
    }

    /// Whether the driver should surface action text for this lock.
    pub fn is_noteworthy(&self) -> bool {
        self.lines_cleared > 0 || self.spin || self.mini_spin
    }
}

/// Base points for a plain clear of `lines` rows.
const LINE_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

/// Base points for a full-spin lock clearing `lines` rows.
const SPIN_POINTS: [u32; 4] = [400, 800, 1200, 1600];

/// Base points for a mini-spin lock clearing `lines` rows.
const MINI_SPIN_POINTS: [u32; 3] = [100, 200, 400];

const COMBO_POINTS: u32 = 50;
const ALL_CLEAR_POINTS: u32 = 3500;

/// Total points awarded for one lock event at the given level.
///
/// Spin locks score from the spin tables instead of the plain line table;
/// back-to-back multiplies the base clear points by 3/2; the combo bonus
/// and the all-clear bonus are added after. Everything scales by
/// `level + 1`.
pub fn lock_points(event: &LockEvent, level: u32) -> u32 {
    let lines = event.lines_cleared as usize;
    let base = if event.spin {
        SPIN_POINTS.get(lines).copied().unwrap_or(0)
    } else if event.mini_spin {
        MINI_SPIN_POINTS.get(lines).copied().unwrap_or(0)
    } else {
        LINE_POINTS.get(lines).copied().unwrap_or(0)
    };

    let base = if event.back_to_back {
        base.saturating_mul(3) / 2
    } else {
        base
    };

    let mut bonus = COMBO_POINTS * event.combo;
    if event.all_clear {
        bonus += ALL_CLEAR_POINTS;
    }

    base.saturating_add(bonus).saturating_mul(level + 1)
}

/// Points per row descended: soft drop 1, hard drop 2 (not level-scaled).
pub fn drop_points(rows: u32, hard: bool) -> u32 {
    if hard {
        rows * 2
    } else {
        rows
    }
}

/// Level advances every 10 cleared lines.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / 10
}
