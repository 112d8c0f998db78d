//! Ports to the surrounding messaging session.
//!
//! The live XMPP session implements these traits in an adapter crate; the
//! pipeline never sees a stanza. Every query is one awaitable round trip
//! that either yields a typed payload or a [`RemoteQueryError`].

use async_trait::async_trait;

use crate::errors::RemoteQueryError;

/// Software descriptor of a remote peer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoftwareVersion {
    pub name: String,
    pub version: String,
    pub os: String,
}

/// Contact address categories a service may publish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactCategory {
    Abuse,
    Admin,
    Feedback,
    Sales,
    Security,
    Support,
}

impl ContactCategory {
    pub const ALL: [ContactCategory; 6] = [
        ContactCategory::Abuse,
        ContactCategory::Admin,
        ContactCategory::Feedback,
        ContactCategory::Sales,
        ContactCategory::Security,
        ContactCategory::Support,
    ];

    /// Field name on the wire, e.g. `abuse-addresses`.
    pub fn var(self) -> &'static str {
        match self {
            ContactCategory::Abuse => "abuse-addresses",
            ContactCategory::Admin => "admin-addresses",
            ContactCategory::Feedback => "feedback-addresses",
            ContactCategory::Sales => "sales-addresses",
            ContactCategory::Security => "security-addresses",
            ContactCategory::Support => "support-addresses",
        }
    }

    /// Complete an abbreviated selector ("abuse", "sec", ...) to the first
    /// matching category. Selectors shorter than two characters stay
    /// ambiguous and never match.
    pub fn from_selector(s: &str) -> Option<ContactCategory> {
        if s.len() < 2 {
            return None;
        }
        Self::ALL.iter().copied().find(|c| c.var().starts_with(s))
    }
}

/// Categorized contact addresses published by a service.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    entries: Vec<(ContactCategory, Vec<String>)>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the addresses of a category, replacing any earlier entry.
    pub fn insert(&mut self, category: ContactCategory, addresses: Vec<String>) {
        self.entries.retain(|(c, _)| *c != category);
        self.entries.push((category, addresses));
    }

    pub fn get(&self, category: ContactCategory) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, a)| a.as_slice())
    }

    /// Categories carrying at least one address, in declaration order.
    pub fn non_empty(&self) -> Vec<(ContactCategory, &[String])> {
        ContactCategory::ALL
            .iter()
            .copied()
            .filter_map(|category| match self.get(category) {
                Some(addresses) if !addresses.is_empty() => Some((category, addresses)),
                _ => None,
            })
            .collect()
    }
}

/// Last revision metadata of an extension document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XepRevision {
    pub date: String,
    pub version: String,
    pub initials: String,
    pub remark: String,
}

/// Header fields of one protocol extension document.
///
/// Fields absent from the index are empty strings; [`XepDocument::field`]
/// distinguishes unknown tags, not missing values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XepDocument {
    pub number: u32,
    pub title: String,
    pub doc_type: String,
    pub summary: String,
    pub status: String,
    pub approver: String,
    pub shortname: String,
    pub sig: String,
    pub lastcall: String,
    pub revision: XepRevision,
}

impl XepDocument {
    /// Look up a header field by its wire tag name ("abstract", "status",
    /// "date", ...). `None` means the tag itself is not recognized.
    pub fn field(&self, tag: &str) -> Option<String> {
        let value = match tag {
            "number" => self.number.to_string(),
            "title" => self.title.clone(),
            "abstract" => self.summary.clone(),
            "type" => self.doc_type.clone(),
            "status" => self.status.clone(),
            "approver" => self.approver.clone(),
            "shortname" => self.shortname.clone(),
            "sig" => self.sig.clone(),
            "lastcall" => self.lastcall.clone(),
            "date" => self.revision.date.clone(),
            "version" => self.revision.version.clone(),
            "initials" => self.revision.initials.clone(),
            "remark" => self.revision.remark.clone(),
            _ => return None,
        };
        Some(value)
    }
}

/// Remote peer queries answered by the live messaging session.
#[async_trait]
pub trait RemoteQueryPort: Send + Sync {
    /// Software name, version and platform of the addressed peer.
    async fn software_version(&self, target: &str) -> Result<SoftwareVersion, RemoteQueryError>;

    /// Seconds since the addressed peer started.
    async fn last_activity(&self, target: &str) -> Result<u64, RemoteQueryError>;

    /// Published contact addresses of the addressed peer.
    async fn contact_info(&self, target: &str) -> Result<ContactForm, RemoteQueryError>;
}

/// Lookup of protocol extension documents by number.
///
/// `Ok(None)` means the identifier is not in the accepted set; transport or
/// parse faults surface as `RemoteQueryError`.
#[async_trait]
pub trait ExtensionDocsPort: Send + Sync {
    async fn lookup(&self, number: &str) -> Result<Option<XepDocument>, RemoteQueryError>;
}

/// Message classification as delivered by the session layer. Controls both
/// the reply routing and the nickname prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    GroupChat,
    Direct,
}

/// Outbound send. The pipeline calls this at most once per inbound message.
#[async_trait]
pub trait MessageSenderPort: Send + Sync {
    async fn send(&self, to: &str, body: &str, kind: MessageKind) -> crate::Result<()>;
}
