//! Trajectory records for PPO over sequence-generation models.
//!
//! A record holds the full data of one completed episode rollout: the prompt
//! tokens, the generated response tokens, and the per-response-token log
//! probabilities, value estimates and rewards. Records are constructed once
//! by the rollout component, validated eagerly, and read many times during
//! batch construction.
//!
//! Vision-extended rollouts additionally carry visual prompt tokens; the two
//! record kinds are distinguished by the [`TrajectoryRecord`] tagged union
//! rather than by probing for the presence of a field.

use crate::error::RlseqError;

/// Checks that a per-action field matches the length of `actions`.
fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<(), RlseqError> {
    if expected != actual {
        Err(RlseqError::LengthMismatch {
            field,
            expected,
            actual,
        })
    } else {
        Ok(())
    }
}

/// One episode of a text-only rollout.
///
/// The record is immutable after construction. `logprobs`, `values` and
/// `rewards` are guaranteed to have the same length as `actions`; the
/// constructor rejects anything else, so consumers such as [`collate`]
/// may rely on the invariant without re-checking it.
///
/// [`collate`]: crate::collate()
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    /// Prompt tokens.
    input_ids: Vec<i64>,

    /// Response tokens generated by the policy.
    actions: Vec<i64>,

    /// Log probabilities of the response tokens under the policy.
    logprobs: Vec<f32>,

    /// Value estimates for the response tokens.
    values: Vec<f32>,

    /// Rewards for the response tokens.
    rewards: Vec<f32>,
}

impl Trajectory {
    /// Creates a validated record.
    ///
    /// # Arguments
    ///
    /// * `input_ids` - Prompt tokens
    /// * `actions` - Generated response tokens
    /// * `logprobs` - Log probabilities, one per response token
    /// * `values` - Value estimates, one per response token
    /// * `rewards` - Rewards, one per response token
    ///
    /// # Errors
    ///
    /// Returns [`RlseqError::LengthMismatch`] if `logprobs`, `values` or
    /// `rewards` do not match `actions` in length.
    pub fn new(
        input_ids: Vec<i64>,
        actions: Vec<i64>,
        logprobs: Vec<f32>,
        values: Vec<f32>,
        rewards: Vec<f32>,
    ) -> Result<Self, RlseqError> {
        let n = actions.len();
        check_len("logprobs", n, logprobs.len())?;
        check_len("values", n, values.len())?;
        check_len("rewards", n, rewards.len())?;

        Ok(Self {
            input_ids,
            actions,
            logprobs,
            values,
            rewards,
        })
    }

    /// Prompt tokens.
    pub fn input_ids(&self) -> &[i64] {
        &self.input_ids
    }

    /// Generated response tokens.
    pub fn actions(&self) -> &[i64] {
        &self.actions
    }

    /// Log probabilities of the response tokens.
    pub fn logprobs(&self) -> &[f32] {
        &self.logprobs
    }

    /// Value estimates for the response tokens.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Rewards for the response tokens.
    pub fn rewards(&self) -> &[f32] {
        &self.rewards
    }
}

/// One episode of a vision-extended rollout.
///
/// Carries the same fields as [`Trajectory`] plus the visual prompt tokens,
/// whose length is independent of both the text prompt and the response.
#[derive(Clone, Debug, PartialEq)]
pub struct VisionTrajectory {
    /// The text part of the episode.
    text: Trajectory,

    /// Visual prompt tokens.
    image_ids: Vec<i64>,
}

impl VisionTrajectory {
    /// Creates a validated record.
    ///
    /// # Errors
    ///
    /// Returns [`RlseqError::LengthMismatch`] under the same conditions
    /// as [`Trajectory::new`].
    pub fn new(
        input_ids: Vec<i64>,
        actions: Vec<i64>,
        logprobs: Vec<f32>,
        values: Vec<f32>,
        rewards: Vec<f32>,
        image_ids: Vec<i64>,
    ) -> Result<Self, RlseqError> {
        let text = Trajectory::new(input_ids, actions, logprobs, values, rewards)?;
        Ok(Self { text, image_ids })
    }

    /// Visual prompt tokens.
    pub fn image_ids(&self) -> &[i64] {
        &self.image_ids
    }

    /// The text part of the episode.
    pub fn text(&self) -> &Trajectory {
        &self.text
    }
}

/// A trajectory record of either kind.
///
/// The discriminant replaces runtime capability probing: a batch is a
/// vision batch iff it contains at least one [`TrajectoryRecord::Vision`]
/// record, which the collator checks once up front.
#[derive(Clone, Debug, PartialEq)]
pub enum TrajectoryRecord {
    /// A text-only episode.
    Text(Trajectory),

    /// A vision-extended episode.
    Vision(VisionTrajectory),
}

impl TrajectoryRecord {
    fn text(&self) -> &Trajectory {
        match self {
            Self::Text(t) => t,
            Self::Vision(v) => v.text(),
        }
    }

    /// Prompt tokens.
    pub fn input_ids(&self) -> &[i64] {
        self.text().input_ids()
    }

    /// Generated response tokens.
    pub fn actions(&self) -> &[i64] {
        self.text().actions()
    }

    /// Log probabilities of the response tokens.
    pub fn logprobs(&self) -> &[f32] {
        self.text().logprobs()
    }

    /// Value estimates for the response tokens.
    pub fn values(&self) -> &[f32] {
        self.text().values()
    }

    /// Rewards for the response tokens.
    pub fn rewards(&self) -> &[f32] {
        self.text().rewards()
    }

    /// Visual prompt tokens, if this is a vision record.
    pub fn image_ids(&self) -> Option<&[i64]> {
        match self {
            Self::Text(_) => None,
            Self::Vision(v) => Some(v.image_ids()),
        }
    }
}

impl From<Trajectory> for TrajectoryRecord {
    fn from(t: Trajectory) -> Self {
        Self::Text(t)
    }
}

impl From<VisionTrajectory> for TrajectoryRecord {
    fn from(v: VisionTrajectory) -> Self {
        Self::Vision(v)
    }
}
