use crate::config::LogFormat;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// RUST_LOG 未設定時使用的 filter
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "brewdog_api=debug,tower_http=debug,info"
    } else {
        "brewdog_api=info,tower_http=info"
    }
}

/// 依設定的格式安裝全域 subscriber，整個 process 只能呼叫一次
pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // 兩個 layer 只會有一個是 Some
    let compact = (format == LogFormat::Compact).then(|| {
        fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .compact()
    });
    let json = (format == LogFormat::Json).then(|| {
        fmt::layer()
            .with_target(true)
            .json()
            .with_current_span(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(json)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for verbose in [false, true] {
            let directives = default_directives(verbose);
            assert!(directives.parse::<EnvFilter>().is_ok());
            assert!(directives.contains("brewdog_api="));
        }
        assert!(default_directives(true).contains("brewdog_api=debug"));
    }
}
