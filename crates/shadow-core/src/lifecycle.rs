use crate::mode::ShadowMode;
use crate::styles::compose_styles;

/// When an attached boundary picks up a new caller stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSync {
    /// Style text is frozen at attach time
    OnCreate,
    /// Style text is rewritten whenever the caller stylesheet changes
    Always,
}

/// What a call to [`Lifecycle::advance`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Attached,
    Restyled,
    Unchanged,
}

/// Why an attach callback gave up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachError<E> {
    /// Nothing was attached to the host; a later pass may try again
    Retry(E),
    /// The host carries a boundary that could not be completed; never attach again
    Abandon(E),
}

enum State<B> {
    Unattached,
    Attached { boundary: B, mode: ShadowMode, styles: String },
    Abandoned,
}

/// One-shot attach state machine for a single host node.
///
/// Moves from unattached to attached (or abandoned) exactly once and never
/// back. Re-runs after that either do nothing or rewrite the style text,
/// depending on the [`StyleSync`] policy. Once the attach callback has
/// succeeded or abandoned, it is never invoked again.
pub struct Lifecycle<B> {
    sync: StyleSync,
    state: State<B>,
}

impl<B> Lifecycle<B> {
    pub fn new(sync: StyleSync) -> Self {
        Self {
            sync,
            state: State::Unattached,
        }
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.state, State::Attached { .. })
    }

    /// True when a boundary was left half-built and setup has stopped for good
    pub fn is_abandoned(&self) -> bool {
        matches!(self.state, State::Abandoned)
    }

    pub fn boundary(&self) -> Option<&B> {
        match &self.state {
            State::Attached { boundary, .. } => Some(boundary),
            State::Unattached | State::Abandoned => None,
        }
    }

    /// Mode the boundary was attached with
    pub fn mode(&self) -> Option<ShadowMode> {
        match &self.state {
            State::Attached { mode, .. } => Some(*mode),
            State::Unattached | State::Abandoned => None,
        }
    }

    /// Style text currently held by the boundary's style element
    pub fn styles(&self) -> Option<&str> {
        match &self.state {
            State::Attached { styles, .. } => Some(styles),
            State::Unattached | State::Abandoned => None,
        }
    }

    /// Bring the boundary in line with the current props.
    ///
    /// `attach` receives the mode and the composed style text and runs only
    /// while unattached. [`AttachError::Retry`] leaves the lifecycle
    /// unattached; [`AttachError::Abandon`] stops all later attach attempts.
    /// Either way the inner error is returned. `restyle`
    /// receives the new composed text and runs only under [`StyleSync::Always`]
    /// when the text actually changed. `mode` is ignored once attached.
    pub fn advance<E>(
        &mut self,
        mode: ShadowMode,
        custom: Option<&str>,
        attach: impl FnOnce(ShadowMode, &str) -> Result<B, AttachError<E>>,
        restyle: impl FnOnce(&B, &str),
    ) -> Result<Advance, E> {
        match &mut self.state {
            State::Unattached => {
                let styles = compose_styles(custom);
                match attach(mode, &styles) {
                    Ok(boundary) => {
                        self.state = State::Attached { boundary, mode, styles };
                        Ok(Advance::Attached)
                    }
                    Err(AttachError::Retry(err)) => Err(err),
                    Err(AttachError::Abandon(err)) => {
                        self.state = State::Abandoned;
                        Err(err)
                    }
                }
            }
            State::Abandoned => Ok(Advance::Unchanged),
            State::Attached { boundary, styles, .. } => {
                if self.sync == StyleSync::OnCreate {
                    return Ok(Advance::Unchanged);
                }
                let next = compose_styles(custom);
                if *styles == next {
                    return Ok(Advance::Unchanged);
                }
                restyle(boundary, &next);
                *styles = next;
                Ok(Advance::Restyled)
            }
        }
    }
}
