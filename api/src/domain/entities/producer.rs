//! Producer domain entity
//!
//! The maker of a toy. Producers are modelled as one concrete entity with a
//! `kind` discriminator; toy producers are the only kind today.

/// Store-assigned identifier for a producer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProducerId(pub i64);

impl From<i64> for ProducerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProducerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a producer makes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProducerKind {
    #[default]
    Toy,
}

impl std::fmt::Display for ProducerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProducerKind::Toy => write!(f, "toy"),
        }
    }
}

impl std::str::FromStr for ProducerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toy" => Ok(ProducerKind::Toy),
            _ => Err(format!("Unknown producer kind: {}", s)),
        }
    }
}

/// A maker of products
#[derive(Debug, Clone)]
pub struct Producer {
    id: Option<ProducerId>,
    name: String,
    kind: ProducerKind,
}

impl Producer {
    pub fn new(name: impl Into<String>, kind: ProducerKind) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind,
        }
    }

    /// A producer of toys that has not been stored yet
    pub fn toy(name: impl Into<String>) -> Self {
        Self::new(name, ProducerKind::Toy)
    }

    pub fn with_id(self, id: ProducerId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub fn id(&self) -> Option<ProducerId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ProducerKind {
        self.kind
    }
}

/// Stored producers are equal when their ids are; unsaved ones compare by content.
impl PartialEq for Producer {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => self.id == other.id && self.name == other.name && self.kind == other.kind,
        }
    }
}

impl Eq for Producer {}
