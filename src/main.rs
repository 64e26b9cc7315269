// SPDX-License-Identifier: Apache-2.0

use anyhow::{anyhow, Context, Result};
use githubgql::{response, ClientConfig, GraphqlClient};
use std::{path::PathBuf, time::Duration};
use structopt::StructOpt;
use tracing::{debug, info};

mod utils;

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Send a GraphQL query to the GitHub API and print the JSON response.")]
struct Opts {
    #[structopt(name = "QUERY", required_unless = "query-file")]
    query: Option<String>,
    #[structopt(short = "f", long, parse(from_os_str), conflicts_with = "QUERY")]
    query_file: Option<PathBuf>,
    #[structopt(short = "v", long, help = "Query variables as a JSON object")]
    variables: Option<String>,
    #[structopt(
        short = "e",
        long,
        help = "GraphQL endpoint, defaults to $GITHUB_GRAPHQL_URL or the public GitHub API"
    )]
    endpoint: Option<String>,
    #[structopt(long, default_value = "GITHUB_TOKEN")]
    token_env: String,
    #[structopt(long)]
    accept: Option<String>,
    #[structopt(long)]
    timeout_secs: Option<u64>,
    #[structopt(long, help = "Fail when the response carries GraphQL errors")]
    strict: bool,
}

impl Opts {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(endpoint) = &self.endpoint {
            config = config.endpoint(endpoint.as_str());
        }
        if let Some(accept) = &self.accept {
            config = config.accept(accept.as_str());
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config = config.timeout(Duration::from_secs(timeout_secs));
        }
        config
    }

    fn load_query(&self) -> Result<String> {
        match (&self.query, &self.query_file) {
            (Some(query), _) => Ok(query.clone()),
            (None, Some(path)) => utils::read_query(path),
            (None, None) => Err(anyhow!("Either QUERY or --query-file is required")),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // set up logging, stdout is reserved for the response
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let opts = Opts::from_args();

    let query = opts.load_query()?;
    let variables = opts
        .variables
        .as_deref()
        .map(utils::parse_variables)
        .transpose()?;
    let token = utils::token_from_env(&opts.token_env);
    if token.is_none() {
        info!("No token in ${}, sending unauthenticated request", opts.token_env);
    }

    let client = GraphqlClient::new(opts.client_config())?;
    debug!("Endpoint: {}", client.endpoint());

    let reply = client
        .request_with_variables(&query, variables.as_ref(), token.as_deref())
        .await
        .context("GraphQL request failed")?;
    let output = if opts.strict {
        response::into_data(reply)?
    } else {
        reply
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opts_with_inline_query() {
        let opts = Opts::from_iter_safe(vec![
            "githubgql",
            "query { viewer { login } }",
            "--endpoint",
            "http://localhost:8080/graphql",
            "--timeout-secs",
            "5",
        ])
        .unwrap();

        assert_eq!("query { viewer { login } }", opts.load_query().unwrap());
        assert_eq!("GITHUB_TOKEN", opts.token_env);

        let config = opts.client_config();
        assert_eq!("http://localhost:8080/graphql", config.endpoint);
        assert_eq!(Some(Duration::from_secs(5)), config.timeout);
    }

    #[test]
    fn test_opts_with_query_file() {
        let opts = Opts::from_iter_safe(vec![
            "githubgql",
            "--query-file",
            "test-data/viewer.graphql",
            "--token-env",
            "MY_TOKEN",
            "--strict",
        ])
        .unwrap();

        assert!(opts.load_query().unwrap().contains("viewer"));
        assert_eq!("MY_TOKEN", opts.token_env);
        assert!(opts.strict);
    }

    #[test]
    fn test_opts_require_a_query() {
        assert!(Opts::from_iter_safe(vec!["githubgql"]).is_err());
    }
}
