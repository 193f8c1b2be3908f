use crate::error::{PitchError, PsResult};
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub match_params: MatchParams,
    #[command(flatten)]
    pub model: ModelParams,
}

/// Identifiers attached to every parsed event of one match.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchParams {
    #[arg(long, default_value = "")]
    pub match_id: String,
    #[arg(long, default_value = "home")]
    pub home_team_id: String,
    #[arg(long, default_value = "away")]
    pub away_team_id: String,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            match_id: String::new(),
            home_team_id: "home".to_string(),
            away_team_id: "away".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModelParams {
    #[arg(long, value_enum, default_value_t = XgModel::Distance)]
    pub xg_model: XgModel,
    #[arg(long, value_enum, default_value_t = ScoreProfile::V1)]
    pub score_profile: ScoreProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum XgModel {
    /// Logistic on distance to the goal center only.
    #[default]
    Distance,
    /// Logistic on distance, goal-mouth angle, box, header and weak-foot flags.
    DistanceAngle,
}

/// Versioned weight tables. A test suite can pin a profile and get
/// reproducible scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreProfile {
    /// Midpoint 0 on every linear category: zero actions score 50.
    #[default]
    V1,
    /// Midpoints shifted so zero actions score about 60.
    V2,
}

/// Logistic calibration: `100 / (1 + exp(-steepness * (raw - midpoint)))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub midpoint: f64,
    pub steepness: f64,
}

impl Curve {
    pub const fn new(midpoint: f64, steepness: f64) -> Self {
        Self {
            midpoint,
            steepness,
        }
    }

    /// Midpoint at which a raw value of 0 maps to `target` (0..100).
    fn centred_on(target: f64, steepness: f64) -> Self {
        let midpoint = (100.0 / target - 1.0).ln() / steepness;
        Self::new(midpoint, steepness)
    }
}

// Signed linear coefficients per category. Penalties carry a negative sign.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassingWeights {
    pub success_rate: f64,
    pub progressive_success: f64,
    pub key_pass: f64,
    pub assist: f64,
    pub pa_success: f64,
    pub fail_count: f64,
    pub curve: Curve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShootingWeights {
    pub goals_above_xg: f64,
    pub xg: f64,
    pub headed_goals: f64,
    pub outbox_goals: f64,
    pub curve: Curve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossingWeights {
    pub accuracy: f64,
    pub log_successful: f64,
    pub central_pa_success: f64,
    pub curve: Curve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DribblingWeights {
    pub breakthrough_success: f64,
    pub failed_dribble_and_miss: f64,
    pub be_fouled: f64,
    pub curve: Curve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefendingWeights {
    pub successful_tackles: f64,
    pub failed_tackles: f64,
    pub intercepts: f64,
    pub blocks: f64,
    pub clears: f64,
    pub aerial_won: f64,
    pub aerial_lost: f64,
    pub duel_wins: f64,
    pub curve: Curve,
}

/// Ratio categories (first touch, decision) only carry a curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioWeights {
    pub curve: Curve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffTheBallWeights {
    pub received_assist: f64,
    pub received_key_pass: f64,
    pub shots_on_target: f64,
    pub goals: f64,
    pub offsides: f64,
    pub curve: Curve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildUpWeights {
    pub own_half_score: f64,
    pub own_half_fail: f64,
    pub curve: Curve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveWeights {
    pub valid_dribble_distance: f64,
    pub breakthrough_success: f64,
    pub dribble_fail: f64,
    pub curve: Curve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveWeights {
    pub catches: f64,
    pub goals_prevented: f64,
    pub curve: Curve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderWeights {
    pub header_sot: f64,
    pub aerial_won: f64,
    pub aerial_lost: f64,
    pub header_clear: f64,
    pub curve: Curve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceWeights {
    pub valid_dribble_distance: f64,
    pub ft_breakthrough_success: f64,
    pub counter_attack_goals: f64,
    pub curve: Curve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub profile: ScoreProfile,
    /// Score used by ratio categories when the player has no qualifying actions.
    pub ratio_fallback: f64,
    pub passing: PassingWeights,
    pub shooting: ShootingWeights,
    pub crossing: CrossingWeights,
    pub dribbling: DribblingWeights,
    pub defending: DefendingWeights,
    pub first_touch: RatioWeights,
    pub off_the_ball: OffTheBallWeights,
    pub decision: RatioWeights,
    pub build_up: BuildUpWeights,
    pub drive: DriveWeights,
    pub save: SaveWeights,
    pub header: HeaderWeights,
    pub pace: PaceWeights,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::for_profile(ScoreProfile::V1)
    }
}

impl ScoringWeights {
    pub fn for_profile(profile: ScoreProfile) -> Self {
        let v1 = Self::v1();
        match profile {
            ScoreProfile::V1 => v1,
            ScoreProfile::V2 => v1.recentred_v2(),
        }
    }

    fn v1() -> Self {
        Self {
            profile: ScoreProfile::V1,
            ratio_fallback: 50.0,
            passing: PassingWeights {
                success_rate: 0.8,
                progressive_success: 1.5,
                key_pass: 2.5,
                assist: 5.0,
                pa_success: 3.0,
                fail_count: -0.5,
                curve: Curve::new(0.0, 0.08),
            },
            shooting: ShootingWeights {
                goals_above_xg: 10.0,
                xg: 15.0,
                headed_goals: 5.0,
                outbox_goals: 3.0,
                curve: Curve::new(0.0, 0.18),
            },
            crossing: CrossingWeights {
                accuracy: 0.7,
                log_successful: 3.0,
                central_pa_success: 2.5,
                curve: Curve::new(0.0, 0.1),
            },
            dribbling: DribblingWeights {
                breakthrough_success: 3.0,
                failed_dribble_and_miss: -1.0,
                be_fouled: 0.8,
                curve: Curve::new(0.0, 0.2),
            },
            defending: DefendingWeights {
                successful_tackles: 2.0,
                failed_tackles: -1.0,
                intercepts: 1.5,
                blocks: 1.2,
                clears: 1.0,
                aerial_won: 1.5,
                aerial_lost: -0.5,
                duel_wins: 0.5,
                curve: Curve::new(0.0, 0.15),
            },
            first_touch: RatioWeights {
                curve: Curve::new(80.0, 0.15),
            },
            off_the_ball: OffTheBallWeights {
                received_assist: 3.0,
                received_key_pass: 1.5,
                shots_on_target: 1.0,
                goals: 1.0,
                offsides: -2.0,
                curve: Curve::new(0.0, 0.25),
            },
            decision: RatioWeights {
                curve: Curve::new(80.0, 0.15),
            },
            build_up: BuildUpWeights {
                own_half_score: 1.0,
                own_half_fail: -0.5,
                curve: Curve::new(0.0, 0.2),
            },
            drive: DriveWeights {
                valid_dribble_distance: 0.1,
                breakthrough_success: 2.0,
                dribble_fail: -1.0,
                curve: Curve::new(0.0, 0.15),
            },
            save: SaveWeights {
                catches: 2.0,
                goals_prevented: 10.0,
                curve: Curve::new(0.0, 0.15),
            },
            header: HeaderWeights {
                header_sot: 3.0,
                aerial_won: 1.5,
                aerial_lost: -0.5,
                header_clear: 1.0,
                curve: Curve::new(0.0, 0.2),
            },
            pace: PaceWeights {
                valid_dribble_distance: 0.05,
                ft_breakthrough_success: 1.5,
                counter_attack_goals: 2.0,
                curve: Curve::new(0.0, 0.2),
            },
        }
    }

    fn recentred_v2(mut self) -> Self {
        self.profile = ScoreProfile::V2;
        self.ratio_fallback = 60.0;
        self.passing.curve.midpoint = -5.0;
        self.shooting.curve.midpoint = -2.2;
        self.crossing.curve.midpoint = -4.0;
        self.dribbling.curve.midpoint = -2.0;
        self.defending.curve.midpoint = -2.7;
        self.off_the_ball.curve.midpoint = -1.6;
        self.build_up.curve = Curve::centred_on(60.0, self.build_up.curve.steepness);
        self.drive.curve = Curve::centred_on(60.0, self.drive.curve.steepness);
        self.save.curve = Curve::centred_on(60.0, self.save.curve.steepness);
        self.header.curve = Curve::centred_on(60.0, self.header.curve.steepness);
        self.pace.curve = Curve::centred_on(60.0, self.pace.curve.steepness);
        self
    }

    /// Loads a JSON weight file on top of a profile. A `profile` named in the
    /// file wins over `fallback`; any field the file leaves out keeps that
    /// profile's built-in value.
    pub fn load_from_file<P: AsRef<Path>>(path: P, fallback: ScoreProfile) -> PsResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content, fallback)
    }

    pub fn from_json_str(content: &str, fallback: ScoreProfile) -> PsResult<Self> {
        let overlay: Value = serde_json::from_str(content)?;
        if !overlay.is_object() {
            return Err(PitchError::Config(
                "weights file must contain a JSON object".to_string(),
            ));
        }

        let profile = match overlay.get("profile") {
            Some(p) => serde_json::from_value(p.clone())?,
            None => fallback,
        };

        let mut base = serde_json::to_value(Self::for_profile(profile))?;
        merge_json(&mut base, overlay);
        Ok(serde_json::from_value(base)?)
    }
}

fn merge_json(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(b), Value::Object(o)) => {
            for (k, v) in o {
                match b.get_mut(&k) {
                    Some(slot) => merge_json(slot, v),
                    None => {
                        b.insert(k, v);
                    }
                }
            }
        }
        (slot, v) => *slot = v,
    }
}
