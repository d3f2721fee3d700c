/// A container as seen by the runtime.
///
/// The orchestrator fills in `name`, `image` and `network`; the remaining
/// fields are populated by [`crate::ContainerRuntime::container_list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    pub id: String,
    pub name: String,
    pub image: String,
    pub network: Option<String>,
    pub command: String,
    pub created: String,
    pub status: String,
    pub state: String,
    pub ports: String,
}

impl Container {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            ..Default::default()
        }
    }

    /// A handle that only carries a name, enough for stop/remove.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_network(mut self, network: Option<String>) -> Self {
        self.network = network;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    pub repository: String,
    pub tag: String,
    pub id: String,
    pub created: String,
    pub size: String,
}

impl Image {
    /// `repository:tag` reference.
    pub fn reference(&self) -> String {
        format!("{}:{}", self.repository, self.tag)
    }
}

/// Options for an interactive exec. Each set option maps to the runtime's
/// equivalent flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOptions {
    pub detached: bool,
    pub interactive: bool,
    pub tty: bool,
    pub user: Option<String>,
    pub workdir: Option<String>,
}

impl ExecOptions {
    /// Interactive session with a terminal attached.
    pub fn interactive_tty() -> Self {
        Self {
            interactive: true,
            tty: true,
            ..Default::default()
        }
    }
}
