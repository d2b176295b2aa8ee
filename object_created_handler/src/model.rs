use serde::{Deserialize, Serialize};

/// Confirmation message the platform receives when every record was handled.
pub const SUCCESS_MESSAGE: &str = "Evento S3 processado com sucesso pela Lambda.";

// see: https://docs.aws.amazon.com/AmazonS3/latest/userguide/notification-content-structure.html
#[derive(Debug, Serialize, Deserialize)]
pub struct S3Notification {
    #[serde(rename = "Records")]
    pub records: Vec<NotificationRecord>,
}

/// One entry in the notification, describing a single affected object.
#[derive(Debug, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct S3Entity {
    pub bucket: Bucket,
    pub object: Object,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Bucket {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Object {
    #[serde(default)]
    pub key: Option<String>,
}

/// The structure the invoking platform expects back from a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    /// The fixed success response. The body carries the confirmation message
    /// JSON-encoded, quotes included.
    pub fn success() -> Self {
        Self {
            status_code: 200,
            body: serde_json::json!(SUCCESS_MESSAGE).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_should_serialize_the_success_response() {
        let value = serde_json::to_value(HandlerResponse::success()).unwrap();
        assert_eq!(
            value,
            json!({
                "statusCode": 200,
                "body": "\"Evento S3 processado com sucesso pela Lambda.\"",
            })
        );
    }

    #[test]
    fn it_should_deserialize_a_full_notification_record() {
        // trimmed from the documented notification content structure
        let notification: S3Notification = serde_json::from_value(json!({
            "Records": [{
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "awsRegion": "us-east-1",
                "eventTime": "2024-09-03T19:37:27.192Z",
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "bucket": {
                        "name": "my-bucket",
                        "arn": "arn:aws:s3:::my-bucket"
                    },
                    "object": {
                        "key": "img1.png",
                        "size": 1024,
                        "eTag": "0123456789abcdef0123456789abcdef"
                    }
                }
            }]
        }))
        .unwrap();

        let record = &notification.records[0];
        assert_eq!(record.s3.bucket.name.as_deref(), Some("my-bucket"));
        assert_eq!(record.s3.object.key.as_deref(), Some("img1.png"));
    }
}
