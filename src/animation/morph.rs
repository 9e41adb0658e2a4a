// src/animation/morph.rs
//
// The morph engine: owns the live joint angles and interpolates them
// toward a target model's canonical angles in real time, blending the
// classification colour pair as it goes.
//
// Two states: Idle (live angles equal the target) and Morphing.
// Starting a new morph mid-flight simply retargets from the current
// live angles; there is no rollback and no queueing.

use rand::Rng;

use crate::config::AnimationConfig;
use crate::models::{data_model, Catalog, NodeAngle, NODE_COUNT};
use crate::services::{analyze, SnakeMetrics};
use crate::views::{Classification, ColourPair};

// velocity 1.0 turns a joint at 90 degrees per second
const DEGREES_PER_VELOCITY: f32 = 90.0;
const VELOCITY_STEP: f32 = 0.1;

pub struct MorphEngine {
    /// live angles, degrees
    nodes: [f32; NODE_COUNT],
    /// canonical angles the live angles are converging to
    target: [NodeAngle; NODE_COUNT],
    /// target at the start of the current morph, for progress
    prev_target: [NodeAngle; NODE_COUNT],

    prev_model: usize,
    next_model: usize,

    prev_class: Classification,
    next_class: Classification,
    colour: ColourPair,
    metrics: SnakeMetrics,

    morphing: bool,
    angular_velocity: f32,

    idle_timeout_ms: f32,
    idle_ms: f32,

    /// joint edited in interactive mode
    selected: usize,
    authentic: bool,
}

impl MorphEngine {
    /// Seed with a uniformly random catalog entry, applied immediately.
    pub fn new(
        catalog: &Catalog,
        config: &AnimationConfig,
        authentic: bool,
        rng: &mut impl Rng,
    ) -> Self {
        let straight = [NodeAngle::Zero; NODE_COUNT];
        let mut engine = Self {
            nodes: [0.0; NODE_COUNT],
            target: straight,
            prev_target: straight,
            prev_model: 0,
            next_model: 0,
            prev_class: Classification::Acyclic,
            next_class: Classification::Acyclic,
            colour: Classification::Acyclic.colours(),
            metrics: analyze(&straight),
            morphing: false,
            angular_velocity: config.angular_velocity,
            idle_timeout_ms: config.idle_timeout_ms,
            idle_ms: 0.0,
            selected: 11,
            authentic,
        };
        let initial = rng.gen_range(0..catalog.len());
        engine.start_morph(catalog, initial, true);
        engine
    }

    /// Begin morphing toward a catalog entry. `immediate` snaps the live
    /// angles and colour straight to the target and stays Idle.
    pub fn start_morph(&mut self, catalog: &Catalog, model_index: usize, immediate: bool) {
        assert!(
            model_index < catalog.len(),
            "model index {} out of range (catalog holds {})",
            model_index,
            catalog.len()
        );
        self.prev_model = self.next_model;
        self.next_model = model_index;
        self.prev_target = self.target;
        self.target = catalog.get(model_index).nodes;
        self.retarget(immediate);
    }

    // Common tail of every retargeting operation: reclassify the new
    // target and restart (or settle) the colour blend.
    fn retarget(&mut self, immediate: bool) {
        self.prev_class = self.next_class;
        self.metrics = analyze(&self.target);
        self.next_class = Classification::from_metrics(&self.metrics, self.authentic);
        self.idle_ms = 0.0;

        if immediate {
            for (node, target) in self.nodes.iter_mut().zip(self.target.iter()) {
                *node = target.degrees();
            }
            self.morphing = false;
            self.colour = self.next_class.colours();
        } else {
            self.morphing = true;
            self.morph_colour();
        }
    }

    /// Advance every joint toward its target by at most the per-tick
    /// angular step, always along the shorter circular path. Settles to
    /// Idle the moment all joints are exact. Safe to call while Idle.
    pub fn update(&mut self, elapsed_ms: f32) {
        if self.morphing {
            let iter_angle_max =
                DEGREES_PER_VELOCITY * (self.angular_velocity / 1000.0) * elapsed_ms;
            let mut still_morphing = false;

            for (node, target) in self.nodes.iter_mut().zip(self.target.iter()) {
                let dest = target.degrees();
                if *node == dest {
                    continue;
                }
                let ahead = (*node - dest).rem_euclid(360.0);
                let distance = ahead.min(360.0 - ahead);
                if distance <= iter_angle_max {
                    *node = dest;
                } else if ahead > 180.0 {
                    *node = (*node + iter_angle_max).rem_euclid(360.0);
                    still_morphing = true;
                } else {
                    *node = (*node - iter_angle_max).rem_euclid(360.0);
                    still_morphing = true;
                }
            }

            self.morphing = still_morphing;
        }

        self.morph_colour();
    }

    /// Called by the driver each tick while not interactive; after the
    /// idle timeout, morphs to a uniformly random catalog entry.
    pub fn auto_advance(&mut self, catalog: &Catalog, elapsed_ms: f32, rng: &mut impl Rng) {
        if self.morphing {
            self.idle_ms = 0.0;
            return;
        }
        self.idle_ms += elapsed_ms;
        if self.idle_ms > self.idle_timeout_ms {
            let index = rng.gen_range(0..catalog.len());
            self.start_morph(catalog, index, false);
        }
    }

    /// How far through the current morph we are, in [0, 1]. The longest
    /// morph is the joint with the largest rotation still to do; any
    /// rotation over 180 degrees folds to its shorter complement. A
    /// degenerate ratio means there is nothing left to do.
    pub fn progress(&self) -> f32 {
        let mut rot_max: f32 = 0.0;
        let mut diff_max: f32 = 0.0;

        for i in 0..NODE_COUNT {
            let rot = fold(self.prev_target[i].degrees() - self.target[i].degrees());
            let diff = fold(self.nodes[i] - self.target[i].degrees());
            rot_max = rot_max.max(rot);
            diff_max = diff_max.max(diff);
        }

        let progress = 1.0 - diff_max / rot_max;
        if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    fn morph_colour(&mut self) {
        self.colour = ColourPair::blend(
            self.prev_class.colours(),
            self.next_class.colours(),
            self.progress(),
        );
    }

    // ------------------- interactive operations -------------------

    pub fn select_prev_node(&mut self) {
        self.selected = (self.selected + NODE_COUNT - 2) % (NODE_COUNT - 1);
    }

    pub fn select_next_node(&mut self) {
        self.selected = (self.selected + 1) % (NODE_COUNT - 1);
    }

    /// Turn the selected joint's target by quarter turns (+1 == +90
    /// degrees) and morph toward the edited shape.
    pub fn nudge_selected(&mut self, quarter_turns: i32) {
        self.prev_target = self.target;
        self.target[self.selected] = self.target[self.selected].turned(quarter_turns);
        self.retarget(false);
    }

    /// Straighten the whole chain.
    pub fn reset_nodes(&mut self) {
        self.prev_target = self.target;
        self.target = [NodeAngle::Zero; NODE_COUNT];
        self.retarget(false);
    }

    /// Flip the authentic palette and reclassify from the stored
    /// metrics; no re-trace is needed.
    pub fn toggle_authentic(&mut self) {
        self.authentic = !self.authentic;
        self.next_class = Classification::from_metrics(&self.metrics, self.authentic);
        self.morph_colour();
    }

    pub fn accelerate(&mut self) {
        self.angular_velocity += VELOCITY_STEP;
    }

    pub fn decelerate(&mut self) {
        if self.angular_velocity > VELOCITY_STEP {
            self.angular_velocity -= VELOCITY_STEP;
        }
    }

    /// Single-line capture of the current target shape, for pasting
    /// into a models file.
    pub fn dump_line(&self, catalog: &Catalog) -> String {
        data_model::dump_line(&catalog.get(self.next_model).name, &self.target)
    }

    // ------------------------- accessors --------------------------

    pub fn nodes(&self) -> &[f32; NODE_COUNT] {
        &self.nodes
    }

    pub fn colour(&self) -> ColourPair {
        self.colour
    }

    pub fn is_morphing(&self) -> bool {
        self.morphing
    }

    pub fn classification(&self) -> Classification {
        self.next_class
    }

    pub fn metrics(&self) -> SnakeMetrics {
        self.metrics
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn next_model_index(&self) -> usize {
        self.next_model
    }

    pub fn model_name<'a>(&self, catalog: &'a Catalog) -> &'a str {
        &catalog.get(self.next_model).name
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }
}

/// Fold an angular difference to the shorter circular distance.
fn fold(diff: f32) -> f32 {
    let diff = diff.abs() % 360.0;
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{data_model::nodes_from_letters, SnakeModel};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_catalog() -> Catalog {
        let straight = SnakeModel::new("straight", [NodeAngle::Zero; NODE_COUNT]);
        let block = SnakeModel::new(
            "block",
            nodes_from_letters("Z Z P P Z R P L P R P R P L P R Z Z P Z Z L P R").unwrap(),
        );
        let mut quarter = [NodeAngle::Zero; NODE_COUNT];
        quarter[0] = NodeAngle::Right;
        let quarter = SnakeModel::new("quarter", quarter);
        let tangle = SnakeModel::new("tangle", [NodeAngle::Pin; NODE_COUNT]);
        Catalog::from_models(vec![straight, block, quarter, tangle])
    }

    fn config() -> AnimationConfig {
        AnimationConfig {
            angular_velocity: 1.0,
            idle_timeout_ms: 5000.0,
            y_spin: 0.1,
            z_spin: 0.1,
        }
    }

    fn engine_at(catalog: &Catalog, index: usize) -> MorphEngine {
        let mut rng = StdRng::seed_from_u64(7);
        let mut engine = MorphEngine::new(catalog, &config(), false, &mut rng);
        engine.start_morph(catalog, index, true);
        engine
    }

    #[test]
    fn immediate_snap_settles_everything() {
        let catalog = test_catalog();
        let engine = engine_at(&catalog, 1);

        let expected = catalog.get(1).angles();
        assert_eq!(engine.nodes(), &expected);
        assert!(!engine.is_morphing());
        assert_eq!(engine.progress(), 1.0);
        assert_eq!(engine.colour(), engine.classification().colours());
    }

    #[test]
    fn interpolation_takes_the_shorter_path() {
        let catalog = test_catalog();
        let mut engine = engine_at(&catalog, 0);

        // 0 -> 270: the shorter way is backwards through 360
        engine.start_morph(&catalog, 2, false);
        engine.update(111.0); // just under a 10 degree step
        let angle = engine.nodes()[0];
        assert!(angle > 349.0 && angle < 351.0, "angle was {}", angle);
    }

    #[test]
    fn morph_converges_to_exact_target() {
        let catalog = test_catalog();
        let mut engine = engine_at(&catalog, 0);

        engine.start_morph(&catalog, 1, false);
        let mut ticks = 0;
        while engine.is_morphing() {
            engine.update(1000.0);
            ticks += 1;
            assert!(ticks < 100, "morph failed to converge");
        }

        assert_eq!(engine.nodes(), &catalog.get(1).angles());
        let expected = Classification::from_metrics(&analyze(&catalog.get(1).nodes), false);
        assert_eq!(engine.classification(), expected);
        assert_eq!(engine.colour(), expected.colours());
    }

    #[test]
    fn update_is_idempotent_once_settled() {
        let catalog = test_catalog();
        let mut engine = engine_at(&catalog, 1);

        let nodes = *engine.nodes();
        let colour = engine.colour();
        for _ in 0..5 {
            engine.update(1000.0);
        }
        assert_eq!(engine.nodes(), &nodes);
        assert_eq!(engine.colour(), colour);
        assert!(!engine.is_morphing());
    }

    #[test]
    fn progress_stays_in_bounds() {
        let catalog = test_catalog();
        let mut engine = engine_at(&catalog, 0);

        engine.start_morph(&catalog, 1, false);
        while engine.is_morphing() {
            engine.update(200.0);
            let p = engine.progress();
            assert!((0.0..=1.0).contains(&p), "progress was {}", p);
        }
        assert_eq!(engine.progress(), 1.0);
    }

    #[test]
    fn retarget_mid_morph_discards_progress() {
        let catalog = test_catalog();
        let mut engine = engine_at(&catalog, 0);

        engine.start_morph(&catalog, 1, false);
        engine.update(300.0);
        assert!(engine.is_morphing());

        // retarget back to straight from wherever we are now
        engine.start_morph(&catalog, 0, false);
        let mut ticks = 0;
        while engine.is_morphing() {
            engine.update(1000.0);
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(engine.nodes(), &catalog.get(0).angles());
    }

    #[test]
    fn auto_advance_waits_for_the_timeout() {
        let catalog = test_catalog();
        let mut engine = engine_at(&catalog, 0);
        let mut rng = StdRng::seed_from_u64(42);

        engine.auto_advance(&catalog, 1000.0, &mut rng);
        assert!(!engine.is_morphing());

        engine.auto_advance(&catalog, 4500.0, &mut rng);
        assert!(engine.is_morphing());
    }

    #[test]
    fn invalid_target_gets_the_invalid_palette() {
        let catalog = test_catalog();
        let mut engine = engine_at(&catalog, 0);

        engine.start_morph(&catalog, 3, true);
        assert_eq!(engine.classification(), Classification::Invalid);

        // authentic never overrides invalid
        engine.toggle_authentic();
        assert_eq!(engine.classification(), Classification::Invalid);
    }

    #[test]
    fn authentic_toggle_reclassifies_legal_shapes() {
        let catalog = test_catalog();
        let mut engine = engine_at(&catalog, 0);

        assert_eq!(engine.classification(), Classification::Acyclic);
        engine.toggle_authentic();
        assert_eq!(engine.classification(), Classification::Authentic);
        engine.toggle_authentic();
        assert_eq!(engine.classification(), Classification::Acyclic);
    }

    #[test]
    fn nudges_edit_the_target_and_restart_the_blend() {
        let catalog = test_catalog();
        let mut engine = engine_at(&catalog, 0);

        engine.nudge_selected(1);
        assert!(engine.is_morphing());
        assert_eq!(engine.dump_line(&catalog).matches('L').count(), 1);

        let mut ticks = 0;
        while engine.is_morphing() {
            engine.update(1000.0);
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(engine.nodes()[engine.selected()], 90.0);
    }

    #[test]
    fn reset_straightens_the_chain() {
        let catalog = test_catalog();
        let mut engine = engine_at(&catalog, 1);

        engine.reset_nodes();
        let mut ticks = 0;
        while engine.is_morphing() {
            engine.update(1000.0);
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(engine.nodes(), &[0.0; NODE_COUNT]);
    }

    #[test]
    fn node_selection_wraps_over_participating_joints() {
        let catalog = test_catalog();
        let mut engine = engine_at(&catalog, 0);

        for _ in 0..NODE_COUNT - 1 {
            engine.select_next_node();
        }
        assert_eq!(engine.selected(), 11);

        engine.select_prev_node();
        assert_eq!(engine.selected(), 10);
    }

    #[test]
    fn dump_line_has_24_tokens_and_the_model_name() {
        let catalog = test_catalog();
        let engine = engine_at(&catalog, 0);

        let line = engine.dump_line(&catalog);
        assert!(line.starts_with("straight: "));
        let tokens: Vec<&str> = line.split(": ").nth(1).unwrap().split(' ').collect();
        assert_eq!(tokens.len(), NODE_COUNT);
        assert!(tokens.iter().all(|t| *t == "Z"));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_index_is_a_programming_error() {
        let catalog = test_catalog();
        let mut engine = engine_at(&catalog, 0);
        engine.start_morph(&catalog, catalog.len(), false);
    }
}
