//! High-level runtime orchestrator.
//!
//! The runtime owns every enemy of a scenario, each as a pattern executor
//! driving an [`EnemyBody`], and advances them in fixed frames. Executor
//! outcomes are turned into events, logged and published on the
//! [`EventBus`].

use std::str::FromStr;
use std::sync::Arc;

use tokio::sync::broadcast;

use game_content::{ContentFactory, EnemyTemplate};
use game_core::{EntityId, EntityMode, GameConfig, PatternExecutor, PcgRng, TickOutcome};

use crate::api::{Result, RuntimeError};
use crate::events::{ActionEvent, BehaviorEvent, Clock, Event, EventBus, Topic};
use crate::host::EnemyBody;
use crate::oracle::TemplateRegistry;
use crate::scenario::Scenario;

/// Runtime configuration shared across the orchestrator and event bus.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Capacity of each event topic channel.
    pub event_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 256;

    /// Fraction of a frame ignored when rounding a duration up to frames.
    const FRAME_ROUNDING_TOLERANCE: f64 = 1e-4;

    pub fn new(game_config: GameConfig) -> Self {
        Self {
            game_config,
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER_SIZE,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// See [`RuntimeConfig::with_env_overrides`] for the variables read.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply environment overrides on top of this configuration.
    ///
    /// Environment variables:
    /// - `PATTERN_SEED` - Base seed for attack-range variant selection
    /// - `FRAME_RATE_HZ` - Simulated frames per second (minimum 1)
    /// - `EVENT_BUFFER_SIZE` - Event channel capacity per topic (minimum 1)
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(seed) = read_env::<u64>("PATTERN_SEED") {
            self.game_config.seed = seed;
        }
        if let Some(rate) = read_env::<u32>("FRAME_RATE_HZ") {
            self.game_config.frame_rate_hz = rate.max(1);
        }
        if let Some(capacity) = read_env::<usize>("EVENT_BUFFER_SIZE") {
            self.event_buffer_size = capacity.max(1);
        }
        self
    }

    /// Number of whole frames needed to cover `seconds`.
    ///
    /// Products within a small tolerance of a whole frame count as that frame, so `0.1` at 60 Hz is 6 frames even though `0.1f32`
    /// is slightly above one tenth.
    pub fn frames_for(&self, seconds: f32) -> u64 {
        let rate = f64::from(self.game_config.frame_rate_hz.max(1));
        let frames = f64::from(seconds.max(0.0)) * rate;
        (frames - Self::FRAME_ROUNDING_TOLERANCE).ceil().max(0.0) as u64
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key).ok()?.parse().ok()
}

/// One spawned enemy.
pub struct Enemy {
    id: EntityId,
    template: String,
    executor: PatternExecutor<EnemyBody>,
}

impl Enemy {
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn body(&self) -> &EnemyBody {
        self.executor.host()
    }

    pub fn body_mut(&mut self) -> &mut EnemyBody {
        self.executor.host_mut()
    }

    pub fn executor(&self) -> &PatternExecutor<EnemyBody> {
        &self.executor
    }

    pub fn mode(&self) -> EntityMode {
        self.executor.mode()
    }
}

/// Events produced by one [`Runtime::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub clock: Clock,
    pub events: Vec<Event>,
}

/// Totals of a multi-frame run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub actions: usize,
    pub mode_changes: usize,
}

impl RunSummary {
    fn record(&mut self, report: &FrameReport) {
        self.frames += 1;
        for event in &report.events {
            match event {
                Event::Action(_) => self.actions += 1,
                Event::Behavior(BehaviorEvent::ModeChanged { .. }) => self.mode_changes += 1,
                Event::Behavior(_) => {}
            }
        }
    }
}

/// Main runtime that drives every enemy of a scenario frame by frame.
pub struct Runtime {
    config: RuntimeConfig,
    scenario: Scenario,
    enemies: Vec<Enemy>,
    bus: EventBus,
    frame: u64,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.id == id)
    }

    pub fn enemy_mut(&mut self, id: EntityId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|enemy| enemy.id == id)
    }

    /// Time of the next frame to run.
    pub fn clock(&self) -> Clock {
        Clock {
            frame: self.frame,
            elapsed: self.frame as f32 * self.config.game_config.fixed_delta(),
        }
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.bus
    }

    /// Subscribe to runtime events of one topic.
    pub fn subscribe(&self, topic: Topic) -> Option<broadcast::Receiver<Event>> {
        self.bus.subscribe(topic)
    }

    /// True once the scenario's duration has been simulated.
    pub fn is_finished(&self) -> bool {
        self.frame >= self.config.frames_for(self.scenario.duration)
    }

    /// Advance every enemy by one fixed frame.
    pub fn step(&mut self) -> FrameReport {
        let delta = self.config.game_config.fixed_delta();
        let clock = self.clock();
        let player_x = self.scenario.player_x_at(clock.elapsed);

        let mut events = Vec::new();
        for enemy in &mut self.enemies {
            let body = enemy.executor.host_mut();
            body.observe_player(player_x);

            let outcome = enemy.executor.tick(delta);
            collect_events(enemy.id, &outcome, clock, &mut events);

            enemy.executor.host_mut().update(delta);
        }

        for event in &events {
            log_event(event);
            self.bus.publish(event.clone());
        }

        self.frame += 1;
        FrameReport { clock, events }
    }

    /// Run enough frames to cover `seconds`.
    pub fn run_for(&mut self, seconds: f32) -> RunSummary {
        let mut summary = RunSummary::default();
        for _ in 0..self.config.frames_for(seconds) {
            let report = self.step();
            summary.record(&report);
        }
        summary
    }

    /// Run until the scenario's duration is reached.
    pub fn run_scenario(&mut self) -> RunSummary {
        let mut summary = RunSummary::default();
        while !self.is_finished() {
            let report = self.step();
            summary.record(&report);
        }
        tracing::info!(
            frames = summary.frames,
            actions = summary.actions,
            mode_changes = summary.mode_changes,
            "scenario finished"
        );
        summary
    }
}

fn collect_events(entity: EntityId, outcome: &TickOutcome, clock: Clock, events: &mut Vec<Event>) {
    if let Some(change) = outcome.mode_change {
        events.push(Event::Behavior(BehaviorEvent::ModeChanged {
            entity,
            from: change.from,
            to: change.to,
            slot: change.slot,
            clock,
        }));
    }
    if outcome.stall_released {
        events.push(Event::Behavior(BehaviorEvent::Landed { entity, clock }));
    }
    if let Some(executed) = outcome.executed {
        events.push(Event::Action(ActionEvent {
            entity,
            slot: executed.slot,
            index: executed.index,
            action: executed.instruction.action,
            wait: executed.instruction.wait,
            clock,
        }));
    }
    if let Some(slot) = outcome.rerolled {
        events.push(Event::Behavior(BehaviorEvent::PatternRerolled {
            entity,
            slot,
            clock,
        }));
    }
}

fn log_event(event: &Event) {
    match event {
        Event::Behavior(BehaviorEvent::ModeChanged {
            entity,
            from,
            to,
            slot,
            clock,
        }) => {
            tracing::debug!(%entity, %from, %to, %slot, frame = clock.frame, "mode changed");
        }
        Event::Behavior(BehaviorEvent::PatternRerolled {
            entity,
            slot,
            clock,
        }) => {
            tracing::debug!(%entity, %slot, frame = clock.frame, "pattern rerolled");
        }
        Event::Behavior(BehaviorEvent::Landed { entity, clock }) => {
            tracing::trace!(%entity, frame = clock.frame, "landed");
        }
        Event::Action(action) => {
            tracing::debug!(
                entity = %action.entity,
                action = %action.action,
                wait = %action.wait,
                slot = %action.slot,
                frame = action.clock.frame,
                "action executed"
            );
        }
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    templates: Option<TemplateRegistry>,
    scenario: Option<Scenario>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            templates: None,
            scenario: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the base seed for variant selection
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.game_config.seed = seed;
        self
    }

    /// Set the enemy templates scenarios may spawn
    pub fn templates(mut self, templates: impl IntoIterator<Item = EnemyTemplate>) -> Self {
        self.templates = Some(templates.into_iter().collect());
        self
    }

    /// Set a prepared template registry
    pub fn registry(mut self, registry: TemplateRegistry) -> Self {
        self.templates = Some(registry);
        self
    }

    /// Set the scenario to simulate
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Load configuration, templates and the named scenario from a data directory.
    ///
    /// The loaded `config.toml` replaces the game configuration; environment
    /// overrides are applied on top of it.
    pub fn content(mut self, factory: &ContentFactory, scenario_name: &str) -> Result<Self> {
        let game_config = factory
            .load_config()
            .map_err(|e| RuntimeError::Content { source: e.into() })?;
        let templates = factory
            .load_enemies()
            .map_err(|e| RuntimeError::Content { source: e.into() })?;
        let source = factory
            .load_scenario_source(scenario_name)
            .map_err(|e| RuntimeError::Content { source: e.into() })?;

        self.config.game_config = game_config;
        self.config = self.config.with_env_overrides();
        self.scenario = Some(Scenario::from_ron_str(&source)?);
        Ok(self.templates(templates))
    }

    /// Compile every enemy's patterns and assemble the runtime.
    ///
    /// Entity ids follow the scenario's placement order. Any pattern error
    /// aborts the build.
    pub fn build(self) -> Result<Runtime> {
        let templates = self.templates.ok_or(RuntimeError::MissingTemplates)?;
        let scenario = self.scenario.ok_or(RuntimeError::MissingScenario)?;
        scenario.validate()?;
        if scenario.enemies.is_empty() {
            tracing::warn!("scenario places no enemies");
        }
        if scenario.player.is_empty() {
            tracing::warn!("scenario has no player track; enemies will stay out of sight");
        }

        let obstacles: Arc<[f32]> = Arc::from(scenario.obstacles.as_slice());
        let mut enemies = Vec::with_capacity(scenario.enemies.len());
        for (index, placement) in scenario.enemies.iter().enumerate() {
            let entity = u32::try_from(index).map(EntityId).map_err(|_| {
                RuntimeError::InvalidScenario("too many enemies in scenario".to_string())
            })?;
            let template = templates.template(&placement.template).ok_or_else(|| {
                RuntimeError::UnknownTemplate {
                    name: placement.template.clone(),
                }
            })?;

            let body = EnemyBody::new(template.body.clone(), placement.x)
                .with_obstacles(Arc::clone(&obstacles));
            let executor = PatternExecutor::compile(
                body,
                &template.patterns,
                &self.config.game_config,
                PcgRng,
                entity,
            )
            .map_err(|source| RuntimeError::EnemyConfiguration {
                entity,
                template: placement.template.clone(),
                source,
            })?;

            tracing::debug!(%entity, template = %placement.template, x = placement.x, "enemy spawned");
            enemies.push(Enemy {
                id: entity,
                template: placement.template.clone(),
                executor,
            });
        }

        tracing::info!(
            enemies = enemies.len(),
            seed = self.config.game_config.seed,
            frame_rate_hz = self.config.game_config.frame_rate_hz,
            "runtime built"
        );

        Ok(Runtime {
            bus: EventBus::with_capacity(self.config.event_buffer_size),
            config: self.config,
            scenario,
            enemies,
            frame: 0,
        })
    }
}
