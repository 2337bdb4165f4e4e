//! Host-side glue: one struct owning the core components, fed by the host's
//! damage, movement, tick, and command callbacks.

use std::sync::Arc;

use st_core::save::{load_regions, save_regions};
use st_core::{
    AttackEvent, EnforcementListener, Location, MoveVerdict, PlayerId, RegionIndex, SpawnRegion,
    TagLedger, TagNotice, Tick, WorldCatalog,
};

use crate::command::{target_world, CommandError, RegionCommand};
use crate::config::PluginConfig;
use crate::message;

/// Host services for reaching a specific player: whether the player is
/// still connected, and a way to put a line of chat in front of them.
pub trait PlayerDirectory {
    fn is_online(&self, player: PlayerId) -> bool;
    fn send_message(&self, player: PlayerId, message: &str);
}

/// Binds the spawn-tag core to a host engine.
///
/// Owns the process-wide [`RegionIndex`] and [`TagLedger`]; the host keeps
/// one bridge for its whole lifetime and routes the relevant callbacks here.
pub struct SpawnTagBridge {
    regions: Arc<RegionIndex>,
    ledger: Arc<TagLedger>,
    listener: EnforcementListener,
    config: PluginConfig,
}

impl SpawnTagBridge {
    pub fn new(config: PluginConfig) -> Self {
        let regions = Arc::new(RegionIndex::new());
        let ledger = Arc::new(TagLedger::new());
        let listener = EnforcementListener::new(Arc::clone(&regions), Arc::clone(&ledger));
        Self { regions, ledger, listener, config }
    }

    pub fn regions(&self) -> &RegionIndex {
        &self.regions
    }

    pub fn ledger(&self) -> &TagLedger {
        &self.ledger
    }

    /// Startup: make sure the data directory exists, then rebuild regions
    /// from the persisted list. Entries that no longer resolve are logged
    /// and dropped; an unreadable file leaves the plugin running with no
    /// regions rather than failing the host.
    pub fn enable(&self, worlds: &dyn WorldCatalog) {
        if !self.config.data_dir.exists() {
            match std::fs::create_dir_all(&self.config.data_dir) {
                Ok(()) => log::info!("Created data directory {:?}", self.config.data_dir),
                Err(err) => {
                    log::warn!(
                        "Could not create data directory {:?}: {}",
                        self.config.data_dir,
                        err
                    );
                }
            }
        }

        log::info!("Loading spawn tag regions...");
        if let Err(err) = load_regions(
            &self.config.regions_path(),
            worlds,
            self.config.default_radius,
            &self.regions,
        ) {
            log::warn!("Could not read regions file: {}", err);
        }
    }

    /// Host damage callback, already filtered to player-vs-player hits.
    pub fn on_player_damaged(
        &self,
        attacker: PlayerId,
        victim: PlayerId,
        now: Tick,
        players: &dyn PlayerDirectory,
    ) {
        let attack = AttackEvent { attacker, victim, victim_online: players.is_online(victim) };
        if let Some(notice) = self.listener.on_attack(attack, now) {
            self.deliver(&notice, players);
        }
    }

    /// Host movement callback. Returns `true` when the host must cancel the
    /// move and keep the player at the prior position.
    pub fn on_player_move(
        &self,
        mover: PlayerId,
        destination: &Location,
        players: &dyn PlayerDirectory,
    ) -> bool {
        match self.listener.on_move(mover, destination) {
            MoveVerdict::Allow => false,
            MoveVerdict::Veto(notice) => {
                self.deliver(&notice, players);
                true
            }
        }
    }

    /// Host tick callback: fire due expiries and tell each affected player.
    /// A player who disconnected mid-cooldown gets no message; the record is
    /// cleared either way.
    pub fn on_tick(&self, now: Tick, players: &dyn PlayerDirectory) {
        for notice in self.listener.on_tick(now) {
            self.deliver(&notice, players);
        }
    }

    /// Disconnect: drop the player's tag without a notice.
    pub fn on_player_quit(&self, player: PlayerId) {
        self.ledger.forget(player);
    }

    /// Executes a region command for `issuer`, replying through the
    /// directory. `issuer_world` is the world the issuer stands in, used
    /// when the command names no world.
    pub fn handle_command(
        &self,
        issuer: PlayerId,
        issuer_world: &str,
        command: RegionCommand,
        worlds: &dyn WorldCatalog,
        players: &dyn PlayerDirectory,
    ) {
        let reply = match self.execute_command(issuer_world, command, worlds) {
            Ok(reply) => reply,
            Err(err) => message::command_error(&err),
        };
        players.send_message(issuer, &reply);
    }

    fn execute_command(
        &self,
        issuer_world: &str,
        command: RegionCommand,
        worlds: &dyn WorldCatalog,
    ) -> Result<String, CommandError> {
        match command {
            RegionCommand::Create { world } => {
                let name = target_world(world.as_deref(), issuer_world);
                let meta = worlds
                    .world_by_name(&name)
                    .ok_or(CommandError::UnknownWorld { world: name })?;

                self.regions.insert(SpawnRegion::new(
                    meta.name.clone(),
                    meta.id,
                    meta.spawn,
                    self.config.default_radius,
                ))?;
                self.persist();
                Ok(message::region_created(&meta.name))
            }
            RegionCommand::Delete { world } => {
                let name = target_world(world.as_deref(), issuer_world);
                self.regions.remove(&name)?;
                self.persist();
                Ok(message::region_deleted(&name))
            }
        }
    }

    /// Rewrites the regions file after a mutation. The in-memory index stays
    /// authoritative when the write fails.
    fn persist(&self) {
        if let Err(err) = save_regions(&self.config.regions_path(), &self.regions) {
            log::warn!("Failed to save region list: {}", err);
        }
    }

    fn deliver(&self, notice: &TagNotice, players: &dyn PlayerDirectory) {
        let player = notice.player();
        if players.is_online(player) {
            players.send_message(player, &message::render_notice(notice));
        }
    }
}
