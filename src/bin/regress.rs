//! Remote regression shell: load a CSV, connect the wallet, submit one
//! signed regression request and print the decoded result.
//!
//! Usage: regress <csv> <target-column> <feature-column>... with the
//! gateway, process address and wallet secret taken from the
//! environment. MODEL and ALPHA select the fit.

use datascope::logging::{json_log, obj, v_str};
use datascope::remote::http::HttpTransport;
use datascope::remote::{compute_regression, ComputeTransport, Model, NullTransport};
use datascope::state::{Config, Session};
use datascope::table::Table;
use datascope::wallet::{Keystore, Permission, Wallet};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("usage: regress <csv> <target-column> <feature-column>...");
        std::process::exit(1);
    }
    let (path, target, features) = (&args[0], &args[1], &args[2..]);

    let cfg = Config::from_env();
    let model: Model = env::var("MODEL")
        .unwrap_or_else(|_| "linear".to_string())
        .parse()?;
    let alpha: f64 = env::var("ALPHA")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0.0);

    let table = Table::from_csv_path(path)?;
    let mut session = Session::new();
    session.load_table(table.clone());
    session.feature_columns = features.to_vec();
    session.target_column = Some(target.clone());

    let wallet = Keystore::from_secret(cfg.wallet_secret.clone())?;
    wallet.connect(&[
        Permission::AccessAddress,
        Permission::SignTransaction,
        Permission::Dispatch,
    ])?;
    session.wallet_connected = true;
    json_log(
        "wallet_connected",
        obj(&[("address", v_str(&wallet.active_address()?))]),
    );

    // Without a process address fall back to the stub transport so the
    // request path can still be exercised end to end.
    let http;
    let transport: &dyn ComputeTransport = if cfg.process_address.is_empty() {
        &NullTransport
    } else {
        http = HttpTransport::new(cfg.gateway_base.clone(), cfg.request_timeout_secs)?;
        &http
    };
    let address = if cfg.process_address.is_empty() {
        "stub".to_string()
    } else {
        cfg.process_address.clone()
    };

    session.begin_compute()?;
    let result = compute_regression(
        &table,
        &session.feature_columns,
        target,
        model,
        alpha,
        transport,
        &address,
        &wallet,
    )
    .await;
    session.finish_compute();

    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(err) => {
            eprintln!("regression failed: {}", err);
            std::process::exit(2);
        }
    }
}
