// Playback controller: cursor, phase machine, auto-advance timing

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::algorithms::{self, AlgorithmId, Category};
use crate::dataset::{self, Dataset};
use crate::snapshot::Snapshot;

pub const DELAY_BASE_MS: u64 = 1010;
pub const DELAY_STEP_MS: u64 = 10;
pub const DELAY_FLOOR_MS: u64 = 50;

/// Where a run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No steps generated yet.
    Idle,
    /// Steps exist; paused somewhere before the end.
    Ready,
    /// Auto-advancing on a timer.
    Playing,
    /// Paused on the last step.
    Finished,
}

/// Drives a recorded run: owns the snapshot list, the cursor into it, and
/// the auto-advance deadline.
///
/// At most one deadline is pending at any time. `play` refuses to reschedule
/// while already playing, and every pause path clears the deadline before
/// anything else, so a stale timer can never advance a paused or
/// reconfigured run.
pub struct Player {
    requested: String,
    algorithm: Option<AlgorithmId>,
    dataset: Dataset,
    steps: Vec<Snapshot>,
    cursor: usize,
    playing: bool,
    speed: u8,
    size: usize,
    seed: u64,
    rng: Pcg32,
    deadline: Option<Instant>,
}

impl Player {
    pub fn new(algorithm: AlgorithmId, size: usize, speed: u8, seed: u64) -> Self {
        Self::from_request(algorithm.as_str(), size, speed, seed)
    }

    /// Build a player from a raw identifier. Unknown identifiers still get a
    /// player; their runs come out as short placeholders.
    pub fn from_request(id: &str, size: usize, speed: u8, seed: u64) -> Self {
        let algorithm = AlgorithmId::parse(id);
        let size = dataset::clamp_size(size);
        let mut rng = Pcg32::seed_from_u64(seed);
        let dataset = dataset::generate(&mut rng, algorithm, size);
        Player {
            requested: id.to_string(),
            algorithm,
            dataset,
            steps: Vec::new(),
            cursor: 0,
            playing: false,
            speed: dataset::clamp_speed(speed),
            size,
            seed,
            rng,
            deadline: None,
        }
    }

    /// Record the full run for the current dataset and rewind to its start.
    pub fn generate(&mut self) {
        self.steps = algorithms::generate_for_id(
            &self.requested,
            &self.dataset.values,
            self.dataset.target,
        );
        self.cursor = 0;
    }

    /// Start auto-advancing. Generates the run first if none exists, and
    /// restarts from the beginning when already at the end. No-op while
    /// already playing.
    pub fn play(&mut self, now: Instant) {
        if self.playing {
            return;
        }
        if self.steps.is_empty() {
            self.generate();
        }
        if self.at_end() {
            self.cursor = 0;
        }
        self.playing = true;
        self.deadline = Some(now + self.delay());
    }

    /// Stop auto-advancing, keeping the cursor where it is.
    pub fn pause(&mut self) {
        self.deadline = None;
        self.playing = false;
    }

    /// Advance one step, clamping at the last snapshot.
    pub fn step_forward(&mut self) {
        if !self.steps.is_empty() && !self.at_end() {
            self.cursor += 1;
        }
    }

    /// Step back one snapshot. Implicitly pauses, clamping at the first.
    pub fn step_back(&mut self) {
        self.pause();
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn jump_to_start(&mut self) {
        self.pause();
        self.cursor = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.pause();
        if !self.steps.is_empty() {
            self.cursor = self.steps.len() - 1;
        }
    }

    /// Throw away the run and draw a fresh dataset from the seeded stream.
    pub fn reset(&mut self) {
        self.pause();
        self.steps.clear();
        self.cursor = 0;
        self.dataset = dataset::generate(&mut self.rng, self.algorithm, self.size);
    }

    /// Change playback speed. Takes effect from the next scheduled advance;
    /// an already pending deadline keeps its original due time.
    pub fn set_speed(&mut self, speed: u8) {
        self.speed = dataset::clamp_speed(speed);
    }

    /// Change the requested array size and reset with a fresh dataset.
    pub fn set_size(&mut self, size: usize) {
        self.size = dataset::clamp_size(size);
        self.reset();
    }

    /// Delay between auto-advances at the current speed.
    pub fn delay(&self) -> Duration {
        let ms = DELAY_BASE_MS
            .saturating_sub(u64::from(self.speed) * DELAY_STEP_MS)
            .max(DELAY_FLOOR_MS);
        Duration::from_millis(ms)
    }

    /// Advance the run if the pending deadline has come due. Returns true
    /// when the cursor moved. Reaching the last step stops playback without
    /// wrapping around.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playing {
            return false;
        }
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.deadline = None;
        if self.at_end() {
            self.playing = false;
            return false;
        }
        self.cursor += 1;
        if self.at_end() {
            self.playing = false;
        } else {
            self.deadline = Some(now + self.delay());
        }
        true
    }

    pub fn phase(&self) -> Phase {
        if self.steps.is_empty() {
            Phase::Idle
        } else if self.playing {
            Phase::Playing
        } else if self.at_end() {
            Phase::Finished
        } else {
            Phase::Ready
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.steps.get(self.cursor)
    }

    pub fn steps(&self) -> &[Snapshot] {
        &self.steps
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn algorithm(&self) -> Option<AlgorithmId> {
        self.algorithm
    }

    /// Display name of whatever was requested, even if unrecognized.
    pub fn algorithm_label(&self) -> &str {
        self.algorithm.map_or(self.requested.as_str(), |a| a.label())
    }

    pub fn category(&self) -> Category {
        self.algorithm
            .map_or(Category::Sorting, AlgorithmId::category)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The pending auto-advance deadline, if one is scheduled.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    fn at_end(&self) -> bool {
        !self.steps.is_empty() && self.cursor + 1 >= self.steps.len()
    }
}
