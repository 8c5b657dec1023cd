//! Platform entity lookup used while parsing entity-kind arguments

use once_cell::sync::Lazy;
use regex::Regex;

use super::kind::ArgumentKind;
use super::value::Entity;
use crate::commands::registry::CommandRegistry;

/// Resolves a token into a platform entity of the requested kind.
///
/// Implementations must not block: parsing runs inline on the dispatcher task.
/// Returning `None` means the token does not name such an entity.
#[cfg_attr(test, mockall::automock)]
pub trait EntityResolver: Send + Sync {
    fn resolve(&self, kind: ArgumentKind, token: &str) -> Option<Entity>;
}

static USER_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<@!?(\d+)>$").expect("valid user mention pattern"));
static ROLE_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<@&(\d+)>$").expect("valid role mention pattern"));
static CHANNEL_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<#(\d+)>$").expect("valid channel mention pattern"));
static EMOTE_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<a?:(\w+):(\d+)>$").expect("valid emote pattern"));

/// Resolves mention markup and raw snowflake ids without consulting the platform.
///
/// | Kind | Accepted |
/// |------|----------|
/// | user | `<@id>`, `<@!id>`, `id` |
/// | role | `<@&id>`, `id` |
/// | channel, voice, category | `<#id>`, `id` |
/// | emote | `<:name:id>`, `<a:name:id>`, `id` |
#[derive(Debug, Clone, Copy, Default)]
pub struct MentionResolver;

impl EntityResolver for MentionResolver {
    fn resolve(&self, kind: ArgumentKind, token: &str) -> Option<Entity> {
        if let Ok(id) = token.parse::<u64>() {
            return kind.is_entity().then(|| Entity::new(kind, id));
        }

        match kind {
            ArgumentKind::User => capture_id(&USER_MENTION, token).map(|id| Entity::new(kind, id)),
            ArgumentKind::Role => capture_id(&ROLE_MENTION, token).map(|id| Entity::new(kind, id)),
            ArgumentKind::Channel | ArgumentKind::Voice | ArgumentKind::Category => {
                capture_id(&CHANNEL_MENTION, token).map(|id| Entity::new(kind, id))
            }
            ArgumentKind::Emote => {
                let caps = EMOTE_MENTION.captures(token)?;
                let id = caps[2].parse().ok()?;
                Some(Entity::new(kind, id).named(&caps[1]))
            }
            _ => None,
        }
    }
}

fn capture_id(pattern: &Regex, token: &str) -> Option<u64> {
    pattern.captures(token)?.get(1)?.as_str().parse().ok()
}

/// Collaborators consulted while parsing
#[derive(Clone, Copy)]
pub struct ParseContext<'a> {
    /// Entity lookup for channel/emote/role/user/voice/category arguments
    pub resolver: &'a dyn EntityResolver,
    /// Registry for command arguments; without one they never resolve
    pub registry: Option<&'a CommandRegistry>,
}

impl<'a> ParseContext<'a> {
    pub fn new(resolver: &'a dyn EntityResolver) -> Self {
        Self {
            resolver,
            registry: None,
        }
    }

    pub fn with_registry(mut self, registry: &'a CommandRegistry) -> Self {
        self.registry = Some(registry);
        self
    }
}

impl Default for ParseContext<'static> {
    fn default() -> Self {
        static MENTIONS: MentionResolver = MentionResolver;
        Self::new(&MENTIONS)
    }
}
