//! HTTP mount point for the demo schemas.
//!
//! A schema is served at a single path (`/graphql` by default). Both `GET` and `POST` requests are
//! accepted there and handed to [`async_graphql_tide`], which decodes GraphQL-over-HTTP requests
//! (a query string for `GET`, a JSON body for `POST`) and encodes the response. Resolver errors do
//! not change the status code; they are reported in the `errors` list of the response body.
//!
//! A request without a query is rejected with `400 Bad Request`, its body carrying a single
//! GraphQL error.
//!
//! When a browser asks for the path (a `GET` request accepting `text/html`), it is served the
//! GraphiQL console instead, unless the console has been disabled. The console opens with the
//! `query` and `variables` given in the URL, if any. Adding a `raw` query parameter to the request
//! skips the console and returns the JSON response.

use crate::graphql::{EmptyMutation, EmptySubscription, Schema};
use async_graphql::{http::GraphiQLSource, ObjectType, ServerError};
use clap::Parser;
use derivative::Derivative;
use std::io;
use std::sync::Arc;
use tide::{
    http::{mime, Method},
    Request, Response, StatusCode,
};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_PATH: &str = "/graphql";

/// Options for serving a schema over HTTP.
#[derive(Clone, Debug, Parser)]
pub struct ServerOptions {
    /// Host name or address to listen on.
    #[clap(long, env = "GRAPHQL_DEMO_HOST", default_value = DEFAULT_HOST)]
    pub host: String,
    /// Port to listen on.
    #[clap(long, env = "GRAPHQL_DEMO_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Path at which the GraphQL endpoint is mounted.
    #[clap(long, env = "GRAPHQL_DEMO_PATH", default_value = DEFAULT_PATH)]
    pub path: String,
    /// Do not serve the GraphiQL console to browsers.
    #[clap(long)]
    pub no_graphiql: bool,
    /// Print the schema in SDL format and exit instead of serving it.
    #[clap(long)]
    pub print_schema: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.into(),
            no_graphiql: false,
            print_schema: false,
        }
    }
}

impl ServerOptions {
    /// The address to listen on, as `host:port`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Where a client on this machine can reach the endpoint.
    pub fn endpoint(&self) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" | "::" | "[::]" => "localhost",
            host => host,
        };
        format!("http://{host}:{}{}", self.port, self.path)
    }
}

/// State shared by all requests to an [`app`].
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct State<Query> {
    schema: Schema<Query, EmptyMutation, EmptySubscription>,
    path: Arc<str>,
    graphiql: bool,
}

/// Build an HTTP application serving `schema`.
pub fn app<Query>(
    schema: Schema<Query, EmptyMutation, EmptySubscription>,
    opt: &ServerOptions,
) -> tide::Server<State<Query>>
where
    Query: ObjectType + 'static,
{
    let mut app = tide::with_state(State {
        schema,
        path: opt.path.as_str().into(),
        graphiql: !opt.no_graphiql,
    });
    app.at(&opt.path)
        .get(handle::<Query>)
        .post(handle::<Query>);
    app
}

/// Serve `schema` until the listener fails.
pub async fn serve<Query>(
    schema: Schema<Query, EmptyMutation, EmptySubscription>,
    opt: &ServerOptions,
) -> io::Result<()>
where
    Query: ObjectType + 'static,
{
    tracing::info!("Running a GraphQL API server at {}", opt.endpoint());
    app(schema, opt).listen(opt.addr()).await
}

/// Entrypoint shared by the demo binaries.
///
/// Either prints the schema, if requested, or serves it.
pub async fn run<Query>(
    schema: Schema<Query, EmptyMutation, EmptySubscription>,
    opt: &ServerOptions,
) -> color_eyre::Result<()>
where
    Query: ObjectType + 'static,
{
    if opt.print_schema {
        println!("{}", schema.sdl());
        return Ok(());
    }
    serve(schema, opt).await?;
    Ok(())
}

async fn handle<Query>(req: Request<State<Query>>) -> tide::Result
where
    Query: ObjectType + 'static,
{
    let state = req.state().clone();

    if state.graphiql && wants_console(&req) {
        tracing::debug!(path = %state.path, "serving GraphiQL console");
        return Ok(Response::builder(StatusCode::Ok)
            .body(console(&state.path, &req))
            .content_type(mime::HTML)
            .build());
    }

    let request = async_graphql_tide::receive_request(req).await?;
    if request.query.trim().is_empty() {
        tracing::debug!("rejecting request without a query");
        let mut res = async_graphql_tide::respond(async_graphql::Response::from_errors(vec![
            ServerError::new("Must provide query string.", None),
        ]))?;
        res.set_status(StatusCode::BadRequest);
        return Ok(res);
    }
    tracing::debug!(operation = ?request.operation_name, "executing GraphQL request");
    async_graphql_tide::respond(state.schema.execute(request).await)
}

/// Render the GraphiQL console for `path`, opening with the query and variables in `req`'s URL.
fn console<S>(path: &str, req: &Request<S>) -> String {
    let page = GraphiQLSource::build().endpoint(path).finish();

    let mut props = String::new();
    for (key, value) in req.url().query_pairs() {
        if key == "query" || key == "variables" {
            props.push_str(&format!("{key}: {},\n", script_string(&value)));
        }
    }
    if props.is_empty() {
        return page;
    }
    page.replacen(
        CONSOLE_PROPS,
        &format!("{CONSOLE_PROPS}\n{props}"),
        1,
    )
}

/// The last property the GraphiQL page passes to the console, after which we add our own.
const CONSOLE_PROPS: &str = "defaultEditorToolsVisibility: true,";

/// Quote `s` as a JavaScript string literal which is safe inside a `<script>` element.
fn script_string(s: &str) -> String {
    serde_json::Value::from(s).to_string().replace("</", "<\\/")
}

/// Is this request from a browser looking for the interactive console?
fn wants_console<S>(req: &Request<S>) -> bool {
    if req.method() != Method::Get {
        return false;
    }
    if req.url().query_pairs().any(|(key, _)| key == "raw") {
        return false;
    }
    match req.header("Accept") {
        Some(accept) => accept
            .iter()
            .any(|value| value.as_str().contains("text/html")),
        None => false,
    }
}
