use outband_types::{ErrorCode, ObservedResponse};

/// Maps what came back from a failed downstream call to its [`ErrorCode`].
pub fn classify(response: &ObservedResponse) -> ErrorCode {
    match response {
        ObservedResponse::NoResponse => ErrorCode::ConnectionFailed,
        ObservedResponse::Http { status, .. } => classify_status(*status),
    }
}

pub fn classify_status(status: u16) -> ErrorCode {
    match status {
        400 | 413 | 422 => ErrorCode::InvalidBody,
        408 | 504 => ErrorCode::Timeout,
        502 | 503 => ErrorCode::ConnectionFailed,
        _ => ErrorCode::Other,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(400, ErrorCode::InvalidBody)]
    #[case(413, ErrorCode::InvalidBody)]
    #[case(422, ErrorCode::InvalidBody)]
    #[case(408, ErrorCode::Timeout)]
    #[case(504, ErrorCode::Timeout)]
    #[case(502, ErrorCode::ConnectionFailed)]
    #[case(503, ErrorCode::ConnectionFailed)]
    #[case(200, ErrorCode::Other)]
    #[case(401, ErrorCode::Other)]
    #[case(404, ErrorCode::Other)]
    #[case(429, ErrorCode::Other)]
    #[case(500, ErrorCode::Other)]
    #[case(501, ErrorCode::Other)]
    #[case(0, ErrorCode::Other)]
    fn test_classify_status(#[case] status: u16, #[case] expected: ErrorCode) {
        assert_eq!(classify_status(status), expected);
        assert_eq!(classify(&ObservedResponse::http(status, "")), expected);
    }

    #[test]
    fn test_unlisted_statuses_are_other() {
        const LISTED: [u16; 7] = [400, 408, 413, 422, 502, 503, 504];
        for status in (0..=u16::MAX).filter(|s| !LISTED.contains(s)) {
            assert_eq!(classify_status(status), ErrorCode::Other, "status {status}");
        }
    }

    #[test]
    fn test_no_response_is_connection_failed() {
        assert_eq!(classify(&ObservedResponse::NoResponse), ErrorCode::ConnectionFailed);
    }
}
