use crate::{
    error::InternalError,
    group::{Group, GroupMember, scanner::GroupScanner},
    model::Row,
    obs::sink::{self, MetricsEvent, Span},
    registry::RenderedRegistry,
    render::Renderer,
    store::{RowStore, ScanPlan},
};

///
/// RenderFailurePolicy
///
/// What to do when a member row fails to materialize. `Skip` is the
/// compatibility default: the member is left out and the build continues,
/// so one broken row never takes down its whole group.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RenderFailurePolicy {
    #[default]
    Skip,
    Propagate,
}

///
/// BuildConfig
///

#[derive(Clone, Copy, Debug, Default)]
pub struct BuildConfig {
    pub render_failure: RenderFailurePolicy,
    pub debug: bool,
}

///
/// GroupBuilder
///
/// Orchestrates one group build: fetches forward candidates, runs the
/// scanner, renders each member, and registers every consumed row id in
/// the caller's registry.
///

pub struct GroupBuilder<'a, S: RowStore, R: Renderer> {
    store: &'a S,
    renderer: &'a R,
    config: BuildConfig,
}

impl<'a, S, R> GroupBuilder<'a, S, R>
where
    S: RowStore,
    R: Renderer,
{
    #[must_use]
    pub const fn new(store: &'a S, renderer: &'a R) -> Self {
        Self {
            store,
            renderer,
            config: BuildConfig {
                render_failure: RenderFailurePolicy::Skip,
                debug: false,
            },
        }
    }

    #[must_use]
    pub const fn with_config(mut self, config: BuildConfig) -> Self {
        self.config = config;
        self
    }

    fn debug_log(&self, s: impl AsRef<str>) {
        if self.config.debug {
            println!("[debug] {}", s.as_ref());
        }
    }

    /// Materialize the group anchored at `anchor`.
    ///
    /// The anchor id is registered before anything else, so the host
    /// pipeline skips it even if the build later degrades. Members that
    /// fail to render are skipped (or propagated, by policy) without
    /// being registered. An empty scope yields a group of just the
    /// anchor.
    pub fn build(
        &self,
        anchor: Row,
        registry: &mut RenderedRegistry,
    ) -> Result<Group<R::Unit>, InternalError> {
        let mut span = Span::start();

        registry.register(anchor.id);

        let plan = ScanPlan::after(&anchor);
        self.debug_log(format!(
            "building group for {} (scope {:?}, cap {:?})",
            anchor.id, plan.scope, plan.limit
        ));

        let candidates = self.store.scan(&plan)?;
        let scanned = GroupScanner::new(self.store).scan_forward(&anchor, candidates)?;

        let mut members = Vec::new();
        for row in scanned.into_iter().skip(1) {
            match self.renderer.render(&row, &anchor) {
                Ok(rendered) => {
                    registry.register(row.id);
                    members.push(GroupMember { row, rendered });
                }
                Err(err) => {
                    sink::record(MetricsEvent::MemberSkipped);
                    self.debug_log(format!("dropping member {}: {err}", row.id));
                    if self.config.render_failure == RenderFailurePolicy::Propagate {
                        return Err(err.into());
                    }
                }
            }
        }

        span.set_members(members.len() as u64);
        Ok(Group::new(anchor, members))
    }

    /// Find the anchor of the group containing `row`. A row is already
    /// the first of its group when this returns the row itself.
    pub fn find_anchor(&self, row: &Row) -> Result<Row, InternalError> {
        GroupScanner::new(self.store).find_anchor(row)
    }
}

///
/// TESTS
///
