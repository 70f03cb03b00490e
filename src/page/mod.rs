//! Page initialization
//!
//! The host page carries three regions that start hidden: the join button,
//! the "coming soon" notice and the "error" notice. Initialization reveals
//! exactly one of them, once, after the document is ready.
//!
//! The DOM is reached through [`PageHost`] and [`PageElement`] so the same
//! logic drives the browser (`web::WebPage`) and the in-memory
//! [`memory::MemoryPage`] used on the host.

use url::Url;

use crate::shared::{AppConfig, JoinError};

/// In-memory page model
pub mod memory;

/// Document readiness gate
pub mod ready;

pub use memory::MemoryPage;
pub use ready::{when_ready, ReadySignal, ReadyState, Readiness};

/// Id of the join link element
pub const JOIN_BUTTON_ID: &str = "join-btn";
/// Id of the development ("coming soon") notice
pub const DEV_NOTICE_ID: &str = "notice-dev";
/// Id of the misconfiguration notice
pub const ERROR_NOTICE_ID: &str = "notice-error";
/// Class that keeps an element out of view
pub const HIDDEN_CLASS: &str = "hidden";
/// Attribute holding the join link target
pub const LINK_ATTRIBUTE: &str = "href";

/// A single element of the host page
pub trait PageElement {
    fn remove_class(&self, class: &str) -> Result<(), JoinError>;

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), JoinError>;
}

/// The host page
pub trait PageHost {
    type Element: PageElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

/// Which of the three regions the page ends up showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// A valid invite is configured; the join button links to `url`
    Join { url: Url },
    /// Development mode
    ComingSoon,
    /// No invite, or one that failed validation
    Misconfigured,
}

impl PageState {
    /// Pick the state for `config`
    ///
    /// Development mode wins over everything else, then a missing or
    /// invalid invite, then the join link.
    pub fn resolve(config: &AppConfig) -> Self {
        if config.dev_mode() {
            return Self::ComingSoon;
        }

        let Some(code) = config.invite_code() else {
            return Self::Misconfigured;
        };

        match code.join_url() {
            Ok(url) => Self::Join { url },
            Err(err) => {
                tracing::error!(error = %err, code = %code, "failed to build join link");
                Self::Misconfigured
            }
        }
    }

    /// Element revealed for this state
    pub fn element_id(&self) -> &'static str {
        match self {
            Self::Join { .. } => JOIN_BUTTON_ID,
            Self::ComingSoon => DEV_NOTICE_ID,
            Self::Misconfigured => ERROR_NOTICE_ID,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Join { .. } => "join",
            Self::ComingSoon => "coming-soon",
            Self::Misconfigured => "misconfigured",
        }
    }
}

/// The three required elements, all located before anything is touched
#[derive(Debug)]
pub struct PageElements<E> {
    pub join_button: E,
    pub dev_notice: E,
    pub error_notice: E,
}

impl<E: PageElement> PageElements<E> {
    /// Look up every required element, reporting all missing ids at once
    pub fn locate<H>(host: &H) -> Result<Self, JoinError>
    where
        H: PageHost<Element = E>,
    {
        let join_button = host.element_by_id(JOIN_BUTTON_ID);
        let dev_notice = host.element_by_id(DEV_NOTICE_ID);
        let error_notice = host.element_by_id(ERROR_NOTICE_ID);

        match (join_button, dev_notice, error_notice) {
            (Some(join_button), Some(dev_notice), Some(error_notice)) => Ok(Self {
                join_button,
                dev_notice,
                error_notice,
            }),
            (join_button, dev_notice, error_notice) => {
                let missing = [
                    (JOIN_BUTTON_ID, join_button.is_none()),
                    (DEV_NOTICE_ID, dev_notice.is_none()),
                    (ERROR_NOTICE_ID, error_notice.is_none()),
                ]
                .into_iter()
                .filter_map(|(id, absent)| absent.then_some(id))
                .collect();
                Err(JoinError::missing(missing))
            }
        }
    }

    /// Reveal the element for `state`
    pub fn apply(&self, state: &PageState) -> Result<(), JoinError> {
        match state {
            PageState::ComingSoon => self.dev_notice.remove_class(HIDDEN_CLASS),
            PageState::Misconfigured => self.error_notice.remove_class(HIDDEN_CLASS),
            PageState::Join { url } => {
                self.join_button.set_attribute(LINK_ATTRIBUTE, url.as_str())?;
                self.join_button.remove_class(HIDDEN_CLASS)
            }
        }
    }
}

/// Show the state matching `config` on `host`
///
/// Failures are logged and leave the page as it was; `None` is returned in
/// that case.
pub fn initialize_page<H: PageHost>(host: &H, config: &AppConfig) -> Option<PageState> {
    match try_initialize(host, config) {
        Ok(state) => {
            tracing::info!(state = state.label(), "page initialized");
            Some(state)
        }
        Err(err) => {
            tracing::error!(error = %err, "page initialization aborted");
            None
        }
    }
}

fn try_initialize<H: PageHost>(host: &H, config: &AppConfig) -> Result<PageState, JoinError> {
    let elements = PageElements::locate(host)?;
    let state = PageState::resolve(config);
    elements.apply(&state)?;
    Ok(state)
}

/// Initialize `host` once the document is ready
///
/// Runs immediately when the document has been parsed, otherwise on the
/// single `DOMContentLoaded` signal.
pub fn boot<H>(host: H, config: AppConfig) -> Option<Readiness>
where
    H: PageHost + ReadySignal + Clone + 'static,
{
    let page = host.clone();
    match when_ready(&host, move || {
        initialize_page(&page, &config);
    }) {
        Ok(readiness) => {
            tracing::debug!(?readiness, "initialization scheduled");
            Some(readiness)
        }
        Err(err) => {
            tracing::error!(error = %err, "could not wait for document ready");
            None
        }
    }
}
