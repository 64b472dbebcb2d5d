// Object Type Domain Model

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Name length limit for queue object types
pub const QUEUE_NAME_LIMIT: usize = 48;

/// Name length limit for channel object types
pub const CHANNEL_NAME_LIMIT: usize = 20;

/// Messaging object category selected on the form.
///
/// Serialized by its display label ("Local Queue", ...) since that is what
/// the form and the JSON API exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    #[serde(rename = "Local Queue")]
    LocalQueue,
    #[serde(rename = "Remote Queue")]
    RemoteQueue,
    #[serde(rename = "Alias Queue")]
    AliasQueue,
    #[serde(rename = "Sender Channel")]
    SenderChannel,
    #[serde(rename = "Receiver Channel")]
    ReceiverChannel,
    #[serde(rename = "Server-Connection Channel")]
    ServerConnectionChannel,
}

/// Command templates, `{}` is replaced by `QMGR.NAME`
const TEMPLATES: [(ObjectType, &str); 6] = [
    (
        ObjectType::LocalQueue,
        "DEFINE QLOCAL({}) DESCR('User-defined local queue') MAXDEPTH(5000) DEFTYPE(PREDEFINED) REPLACE",
    ),
    (
        ObjectType::RemoteQueue,
        "DEFINE QREMOTE({}) RNAME('TARGET.QUEUE') RQMNAME('TARGETQM') XMITQ('TRANSMIT.QUEUE') DESCR('Remote queue mapping') REPLACE",
    ),
    (
        ObjectType::AliasQueue,
        "DEFINE QALIAS({}) TARGET('BASE.QUEUE') TARGTYPE(QUEUE) DESCR('Alias queue reference') REPLACE",
    ),
    (
        ObjectType::SenderChannel,
        "DEFINE CHANNEL({}) CHLTYPE(SDR) TRPTYPE(TCP) CONNAME('TARGET.HOST(1414)') XMITQ('XMITQ') SSLCIPH('TLS_RSA_WITH_AES_128_CBC_SHA256') DESCR('Sender channel') REPLACE",
    ),
    (
        ObjectType::ReceiverChannel,
        "DEFINE CHANNEL({}) CHLTYPE(RCVR) TRPTYPE(TCP) SSLCIPH('TLS_RSA_WITH_AES_128_CBC_SHA256') DESCR('Receiver channel') REPLACE",
    ),
    (
        ObjectType::ServerConnectionChannel,
        "DEFINE CHANNEL({}) CHLTYPE(SVRCONN) MCAUSER('mqm') DESCR('Server-connection channel') REPLACE",
    ),
];

impl ObjectType {
    /// All object types in form order
    pub const ALL: [ObjectType; 6] = [
        ObjectType::LocalQueue,
        ObjectType::RemoteQueue,
        ObjectType::AliasQueue,
        ObjectType::SenderChannel,
        ObjectType::ReceiverChannel,
        ObjectType::ServerConnectionChannel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ObjectType::LocalQueue => "Local Queue",
            ObjectType::RemoteQueue => "Remote Queue",
            ObjectType::AliasQueue => "Alias Queue",
            ObjectType::SenderChannel => "Sender Channel",
            ObjectType::ReceiverChannel => "Receiver Channel",
            ObjectType::ServerConnectionChannel => "Server-Connection Channel",
        }
    }

    /// Maximum object name length (the QMGR prefix is not counted)
    pub fn max_name_length(&self) -> usize {
        if self.label().contains("Queue") {
            QUEUE_NAME_LIMIT
        } else {
            CHANNEL_NAME_LIMIT
        }
    }

    /// Raw command template for this type
    pub fn template(&self) -> &'static str {
        TEMPLATES
            .iter()
            .find(|(kind, _)| kind == self)
            .map(|(_, template)| *template)
            .unwrap_or_default()
    }

    /// Render one DEFINE command for an already qualified object name
    pub fn render(&self, qualified_name: &str) -> String {
        self.template().replacen("{}", qualified_name, 1)
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ObjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectType::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| DomainError::UnknownObjectType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_follow_label() {
        assert_eq!(ObjectType::LocalQueue.max_name_length(), 48);
        assert_eq!(ObjectType::RemoteQueue.max_name_length(), 48);
        assert_eq!(ObjectType::AliasQueue.max_name_length(), 48);
        assert_eq!(ObjectType::SenderChannel.max_name_length(), 20);
        assert_eq!(ObjectType::ReceiverChannel.max_name_length(), 20);
        assert_eq!(ObjectType::ServerConnectionChannel.max_name_length(), 20);
    }

    #[test]
    fn test_every_type_has_template() {
        for kind in ObjectType::ALL {
            assert!(kind.template().starts_with("DEFINE "), "{kind}");
            assert_eq!(kind.template().matches("{}").count(), 1, "{kind}");
        }
    }

    #[test]
    fn test_render_every_type() {
        let cases = [
            (
                ObjectType::LocalQueue,
                "DEFINE QLOCAL(QM1.X) DESCR('User-defined local queue') MAXDEPTH(5000) DEFTYPE(PREDEFINED) REPLACE",
            ),
            (
                ObjectType::RemoteQueue,
                "DEFINE QREMOTE(QM1.X) RNAME('TARGET.QUEUE') RQMNAME('TARGETQM') XMITQ('TRANSMIT.QUEUE') DESCR('Remote queue mapping') REPLACE",
            ),
            (
                ObjectType::AliasQueue,
                "DEFINE QALIAS(QM1.X) TARGET('BASE.QUEUE') TARGTYPE(QUEUE) DESCR('Alias queue reference') REPLACE",
            ),
            (
                ObjectType::SenderChannel,
                "DEFINE CHANNEL(QM1.X) CHLTYPE(SDR) TRPTYPE(TCP) CONNAME('TARGET.HOST(1414)') XMITQ('XMITQ') SSLCIPH('TLS_RSA_WITH_AES_128_CBC_SHA256') DESCR('Sender channel') REPLACE",
            ),
            (
                ObjectType::ReceiverChannel,
                "DEFINE CHANNEL(QM1.X) CHLTYPE(RCVR) TRPTYPE(TCP) SSLCIPH('TLS_RSA_WITH_AES_128_CBC_SHA256') DESCR('Receiver channel') REPLACE",
            ),
            (
                ObjectType::ServerConnectionChannel,
                "DEFINE CHANNEL(QM1.X) CHLTYPE(SVRCONN) MCAUSER('mqm') DESCR('Server-connection channel') REPLACE",
            ),
        ];

        assert_eq!(cases.len(), ObjectType::ALL.len());
        for (kind, expected) in cases {
            assert_eq!(kind.render("QM1.X"), expected, "{kind}");
        }
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(
            "Server-Connection Channel".parse::<ObjectType>().unwrap(),
            ObjectType::ServerConnectionChannel
        );
        assert!("local queue".parse::<ObjectType>().is_err());
        assert!("Topic".parse::<ObjectType>().is_err());
        assert!(" Local Queue ".parse::<ObjectType>().is_err());
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&ObjectType::AliasQueue).unwrap();
        assert_eq!(json, "\"Alias Queue\"");
        let back: ObjectType = serde_json::from_str("\"Sender Channel\"").unwrap();
        assert_eq!(back, ObjectType::SenderChannel);
    }
}
