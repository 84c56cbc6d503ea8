mod table;

use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::net::SocketAddr;
use std::process::ExitCode;
use tokio::net::TcpListener;

use crate::core::{
    CoastFireError, CoastFireInput, CoastFireResult, InputField, calculate, format_amount,
    format_percentage_default,
};

pub use table::{
    DEFAULT_PAGE_SIZE, SortDirection, SortField, TablePage, TableState, format_row, page_of,
    total_pages,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliSortField {
    Age,
    Amount,
    InflationAdjusted,
    RealReturn,
}

impl From<CliSortField> for SortField {
    fn from(value: CliSortField) -> Self {
        match value {
            CliSortField::Age => SortField::Age,
            CliSortField::Amount => SortField::Amount,
            CliSortField::InflationAdjusted => SortField::InflationAdjusted,
            CliSortField::RealReturn => SortField::RealReturn,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiSortField {
    Age,
    #[serde(alias = "nominal")]
    Amount,
    #[serde(alias = "inflationAdjusted", alias = "inflation_adjusted", alias = "real")]
    InflationAdjusted,
    #[serde(alias = "realReturn", alias = "real_return")]
    RealReturn,
}

impl From<ApiSortField> for CliSortField {
    fn from(value: ApiSortField) -> Self {
        match value {
            ApiSortField::Age => CliSortField::Age,
            ApiSortField::Amount => CliSortField::Amount,
            ApiSortField::InflationAdjusted => CliSortField::InflationAdjusted,
            ApiSortField::RealReturn => CliSortField::RealReturn,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ApiSortDirection {
    #[serde(alias = "ascending")]
    Asc,
    #[serde(alias = "descending")]
    Desc,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CalculatePayload {
    target_amount: Option<f64>,
    target_age: Option<f64>,
    current_age: Option<f64>,
    return_rate: Option<f64>,
    inflation_rate: Option<f64>,

    sort_by: Option<ApiSortField>,
    sort_direction: Option<ApiSortDirection>,
    page: Option<usize>,
    page_size: Option<usize>,
}

#[derive(Parser, Debug)]
#[command(
    name = "coastfire",
    about = "Coast FIRE calculator: capital needed today to reach an inflation-adjusted target by a given age",
    after_help = "Run `coastfire serve [port]` to start the HTTP API instead."
)]
struct Cli {
    #[arg(
        long,
        default_value_t = 2000.0,
        help = "Target assets in today's money, in units of 10,000 yen (100 to 100000)"
    )]
    target_amount: f64,
    #[arg(long, default_value_t = 65.0, help = "Age at which the target is reached (30 to 100)")]
    target_age: f64,
    #[arg(long, default_value_t = 28.0, help = "Current age (0 to 99)")]
    current_age: f64,
    #[arg(
        long,
        default_value_t = 5.0,
        help = "Expected annual nominal return in percent (0 to 20)"
    )]
    return_rate: f64,
    #[arg(long, default_value_t = 2.0, help = "Expected annual inflation in percent (0 to 10)")]
    inflation_rate: f64,
    #[arg(long, value_enum, default_value_t = CliSortField::Age)]
    sort_by: CliSortField,
    #[arg(long, help = "Sort the yearly table in descending order")]
    descending: bool,
    #[arg(long, default_value_t = 1, help = "1-based page of the yearly table")]
    page: usize,
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,
    #[arg(long, help = "Print the full result as JSON instead of a report")]
    json: bool,
}

#[derive(Copy, Clone, Debug)]
struct ApiOptions {
    table: TableState,
    page_size: usize,
}

#[derive(Debug)]
struct ApiRequest {
    input: CoastFireInput,
    options: ApiOptions,
}

/// Headline figures of a result, already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub required_amount: String,
    pub target_amount: String,
    pub investment_years: u32,
    pub real_return_rate: String,
    pub target_nominal_amount: String,
}

impl Summary {
    pub fn new(input: &CoastFireInput, result: &CoastFireResult) -> Self {
        Self {
            required_amount: format_amount(result.required_amount),
            target_amount: format_amount(input.target_amount),
            investment_years: result.investment_years,
            real_return_rate: format_percentage_default(result.real_return_rate),
            target_nominal_amount: format_amount(result.target_nominal_amount),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CalculateResponse {
    result: CoastFireResult,
    summary: Summary,
    table: TablePage,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    error: String,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<InputField>,
}

/// Converts display-form arguments (whole-number percent) into an engine
/// input plus table options.
fn build_request(cli: Cli) -> Result<ApiRequest, String> {
    if cli.page == 0 {
        return Err("--page must be >= 1".to_string());
    }
    if cli.page_size == 0 {
        return Err("--page-size must be > 0".to_string());
    }

    // Selecting a column starts ascending; selecting it again flips it.
    let sort_field = SortField::from(cli.sort_by);
    let mut table = TableState::default();
    if table.sort_field != sort_field {
        table.toggle_sort(sort_field);
    }
    if cli.descending {
        table.toggle_sort(sort_field);
    }
    table.page = cli.page;

    Ok(ApiRequest {
        input: CoastFireInput {
            target_amount: cli.target_amount,
            target_age: cli.target_age,
            current_age: cli.current_age,
            return_rate: cli.return_rate / 100.0,
            inflation_rate: cli.inflation_rate / 100.0,
        },
        options: ApiOptions {
            table,
            page_size: cli.page_size,
        },
    })
}

/// Entry point for the command-line report. `args` includes the program name.
pub fn run_cli<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match cli_output(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}

fn cli_output(cli: Cli) -> Result<String, String> {
    let json = cli.json;
    let request = build_request(cli)?;
    let result = run_calculation(&request.input).map_err(|e| e.to_string())?;

    if json {
        let mut encoded = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("failed to encode result: {e}"))?;
        encoded.push('\n');
        return Ok(encoded);
    }
    Ok(render_report(&request, &result))
}

fn run_calculation(input: &CoastFireInput) -> Result<CoastFireResult, CoastFireError> {
    debug!("calculating coast FIRE projection for {input:?}");
    calculate(input).inspect_err(|e| warn!("rejected input ({}): {e}", e.kind()))
}

fn render_report(request: &ApiRequest, result: &CoastFireResult) -> String {
    let summary = Summary::new(&request.input, result);
    let page = page_of(
        &result.yearly_data,
        request.options.table,
        request.options.page_size,
    );

    let mut out = format!(
        "Coast FIRE projection\n\
         \x20 Required today:         {}\n\
         \x20 Target (today's value): {}\n\
         \x20 Investment period:      {} years\n\
         \x20 Real return rate:       {}\n\
         \x20 Nominal at target age:  {}\n\n",
        summary.required_amount,
        summary.target_amount,
        summary.investment_years,
        summary.real_return_rate,
        summary.target_nominal_amount,
    );
    out.push_str(&format!(
        "{:<6} {:>14} {:>14} {:>12}\n",
        "Age", "Nominal", "Real", "Real return"
    ));
    for row in &page.rows {
        let [age, amount, adjusted, real_return] = format_row(row);
        out.push_str(&format!(
            "{age:<6} {amount:>14} {adjusted:>14} {real_return:>12}\n"
        ));
    }
    out.push_str(&format!(
        "Rows {}-{} of {} (page {}/{})\n",
        page.first_index, page.last_index, page.total_rows, page.page, page.total_pages
    ));
    out
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = router();

    let listener = TcpListener::bind(addr).await?;
    info!("Coast FIRE HTTP API listening on http://{addr}");
    info!("Local access: http://127.0.0.1:{port}/api/calculate");

    axum::serve(listener, app).await
}

fn router() -> Router {
    Router::new()
        .route(
            "/api/calculate",
            get(calculate_get_handler).post(calculate_post_handler),
        )
        .fallback(not_found_handler)
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found", "notFound", None)
}

async fn calculate_get_handler(
    payload: Result<Query<CalculatePayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => calculate_handler_impl(payload),
        Err(rejection) => rejected_payload(rejection.body_text()),
    }
}

async fn calculate_post_handler(
    payload: Result<Json<CalculatePayload>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(payload)) => calculate_handler_impl(payload),
        Err(rejection) => rejected_payload(rejection.body_text()),
    }
}

fn rejected_payload(msg: String) -> Response {
    warn!("rejected payload: {msg}");
    error_response(StatusCode::BAD_REQUEST, &msg, "invalidRequest", None)
}

fn calculate_handler_impl(payload: CalculatePayload) -> Response {
    let request = match api_request_from_payload(payload) {
        Ok(request) => request,
        Err(msg) => return rejected_payload(msg),
    };

    match run_calculation(&request.input) {
        Ok(result) => json_response(StatusCode::OK, build_calculate_response(&request, result)),
        Err(e) => error_response(
            StatusCode::BAD_REQUEST,
            &e.to_string(),
            e.kind(),
            Some(e.field()),
        ),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(
    status: StatusCode,
    msg: &str,
    kind: &'static str,
    field: Option<InputField>,
) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
            kind,
            field,
        },
    )
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ApiRequest, String> {
    let payload = serde_json::from_str::<CalculatePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    api_request_from_payload(payload)
}

fn api_request_from_payload(payload: CalculatePayload) -> Result<ApiRequest, String> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.target_amount {
        cli.target_amount = v;
    }
    if let Some(v) = payload.target_age {
        cli.target_age = v;
    }
    if let Some(v) = payload.current_age {
        cli.current_age = v;
    }
    if let Some(v) = payload.return_rate {
        cli.return_rate = v;
    }
    if let Some(v) = payload.inflation_rate {
        cli.inflation_rate = v;
    }

    if let Some(v) = payload.sort_by {
        cli.sort_by = v.into();
    }
    if let Some(v) = payload.sort_direction {
        cli.descending = v == ApiSortDirection::Desc;
    }
    if let Some(v) = payload.page {
        cli.page = v;
    }
    if let Some(v) = payload.page_size {
        cli.page_size = v;
    }

    build_request(cli)
}

fn default_cli_for_api() -> Cli {
    let defaults = CoastFireInput::default();
    Cli {
        target_amount: defaults.target_amount,
        target_age: defaults.target_age,
        current_age: defaults.current_age,
        return_rate: defaults.return_rate * 100.0,
        inflation_rate: defaults.inflation_rate * 100.0,
        sort_by: CliSortField::Age,
        descending: false,
        page: 1,
        page_size: DEFAULT_PAGE_SIZE,
        json: false,
    }
}

fn build_calculate_response(request: &ApiRequest, result: CoastFireResult) -> CalculateResponse {
    let summary = Summary::new(&request.input, &result);
    let table = page_of(
        &result.yearly_data,
        request.options.table,
        request.options.page_size,
    );
    CalculateResponse {
        result,
        summary,
        table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_cli() -> Cli {
        default_cli_for_api()
    }

    #[test]
    fn cli_defaults_match_default_input() {
        let cli = Cli::try_parse_from(["coastfire"]).expect("defaults parse");
        let request = build_request(cli).expect("valid request");
        let defaults = CoastFireInput::default();

        assert_approx(request.input.target_amount, defaults.target_amount);
        assert_approx(request.input.return_rate, defaults.return_rate);
        assert_approx(request.input.inflation_rate, defaults.inflation_rate);
        assert_eq!(request.options.table, TableState::default());
        assert_eq!(request.options.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn cli_converts_percent_arguments_to_fractions() {
        let cli = Cli::try_parse_from([
            "coastfire",
            "--return-rate",
            "7",
            "--inflation-rate",
            "1.5",
            "--sort-by",
            "inflation-adjusted",
            "--descending",
        ])
        .expect("valid args");
        let request = build_request(cli).expect("valid request");

        assert_approx(request.input.return_rate, 0.07);
        assert_approx(request.input.inflation_rate, 0.015);
        assert_eq!(
            request.options.table.sort_field,
            SortField::InflationAdjusted
        );
        assert_eq!(request.options.table.direction, SortDirection::Desc);
    }

    #[test]
    fn build_request_rejects_zero_page_size() {
        let mut cli = sample_cli();
        cli.page_size = 0;
        let err = build_request(cli).expect_err("must reject empty pages");
        assert!(err.contains("--page-size"));
    }

    #[test]
    fn build_request_rejects_page_zero() {
        let mut cli = sample_cli();
        cli.page = 0;
        let err = build_request(cli).expect_err("pages are 1-based");
        assert!(err.contains("--page"));
    }

    #[test]
    fn api_request_from_json_parses_web_keys() {
        let request = api_request_from_json(
            r#"{
                "targetAmount": 3000,
                "targetAge": 60,
                "currentAge": 35,
                "returnRate": 6,
                "inflationRate": 2.5,
                "sortBy": "realReturn",
                "sortDirection": "desc",
                "page": 2,
                "pageSize": 5
            }"#,
        )
        .expect("valid json");

        assert_approx(request.input.target_amount, 3000.0);
        assert_approx(request.input.target_age, 60.0);
        assert_approx(request.input.current_age, 35.0);
        assert_approx(request.input.return_rate, 0.06);
        assert_approx(request.input.inflation_rate, 0.025);
        assert_eq!(request.options.table.sort_field, SortField::RealReturn);
        assert_eq!(request.options.table.direction, SortDirection::Desc);
        assert_eq!(request.options.table.page, 2);
        assert_eq!(request.options.page_size, 5);
    }

    #[test]
    fn api_request_from_json_rejects_unknown_sort_field() {
        let err = api_request_from_json(r#"{"sortBy": "salary"}"#).expect_err("unknown field");
        assert!(err.contains("Invalid API JSON payload"));
    }

    #[test]
    fn out_of_band_inflation_is_rejected_by_engine() {
        let request =
            api_request_from_json(r#"{"inflationRate": 15}"#).expect("payload itself is valid");
        let err = run_calculation(&request.input).expect_err("inflation above 10%");
        assert_eq!(err.kind(), "invalidRange");
        assert!(err.to_string().contains("inflation rate"));
    }

    #[test]
    fn error_response_names_the_offending_field() {
        let body = ErrorResponse {
            error: "inflation rate must be between 0% and 10%".to_string(),
            kind: "invalidRange",
            field: Some(InputField::InflationRate),
        };
        let value = serde_json::to_value(&body).expect("serializable");
        assert_eq!(value["field"], "inflationRate");
        assert_eq!(value["kind"], "invalidRange");

        let body = ErrorResponse {
            error: "Not found".to_string(),
            kind: "notFound",
            field: None,
        };
        let value = serde_json::to_value(&body).expect("serializable");
        assert!(value.get("field").is_none());
    }

    #[test]
    fn calculate_response_serialization_contains_expected_fields() {
        let request = api_request_from_json("{}").expect("defaults");
        let result = run_calculation(&request.input).expect("valid defaults");
        let response = build_calculate_response(&request, result);
        let value = serde_json::to_value(&response).expect("serializable");

        assert_eq!(value["result"]["investmentYears"], 37);
        assert_eq!(
            value["result"]["yearlyData"]
                .as_array()
                .map(|rows| rows.len()),
            Some(38)
        );
        assert!(value["result"]["yearlyData"][0]["inflationAdjusted"].is_number());
        assert_eq!(value["summary"]["realReturnRate"], "2.94%");
        assert_eq!(value["summary"]["targetAmount"], "2,000万円");
        assert_eq!(value["table"]["sortField"], "age");
        assert_eq!(value["table"]["sortDirection"], "asc");
        assert_eq!(value["table"]["totalPages"], 4);
        assert_eq!(value["table"]["rows"].as_array().map(|r| r.len()), Some(10));
    }

    #[test]
    fn report_lists_summary_and_requested_page() {
        let mut cli = sample_cli();
        cli.page = 4;
        let request = build_request(cli).expect("valid request");
        let result = run_calculation(&request.input).expect("valid input");
        let report = render_report(&request, &result);

        assert!(report.contains("Investment period:      37 years"));
        assert!(report.contains("Real return rate:       2.94%"));
        assert!(report.contains("2,000万円"));
        assert!(report.contains("65歳"));
        assert!(!report.contains("28歳"));
        assert!(report.contains("Rows 31-38 of 38 (page 4/4)"));
    }

    #[test]
    fn json_output_is_the_full_result() {
        let mut cli = sample_cli();
        cli.json = true;
        let output = cli_output(cli).expect("valid defaults");
        let value: serde_json::Value = serde_json::from_str(&output).expect("json output");

        assert_eq!(value["investmentYears"], 37);
        assert!(value["requiredAmount"].as_f64().is_some_and(|v| v > 600.0 && v < 800.0));
    }

    #[test]
    fn cli_output_reports_ordering_error() {
        let mut cli = sample_cli();
        cli.target_age = 28.0;
        let err = cli_output(cli).expect_err("equal ages");
        assert_eq!(err, "target age must be greater than current age");
    }

    #[test]
    fn summary_formats_headline_figures() {
        let input = CoastFireInput::default();
        let result = calculate(&input).expect("valid input");
        let summary = Summary::new(&input, &result);

        assert_eq!(summary.investment_years, 37);
        assert_eq!(summary.target_amount, "2,000万円");
        assert_eq!(summary.required_amount, format_amount(result.required_amount));
        assert!(summary.target_nominal_amount.ends_with("万円"));
    }

    #[test]
    fn descending_age_flips_the_default_column() {
        let mut cli = sample_cli();
        cli.descending = true;
        let request = build_request(cli).expect("valid request");
        assert_eq!(request.options.table.sort_field, SortField::Age);
        assert_eq!(request.options.table.direction, SortDirection::Desc);
        assert_eq!(request.options.table.page, 1);
    }

    async fn send(request: Request<Body>) -> (StatusCode, Response) {
        let response = router().oneshot(request).await.expect("infallible router");
        (response.status(), response)
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    fn assert_json_no_store(response: &Response) {
        let headers = response.headers();
        assert_eq!(
            headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        assert_eq!(
            headers
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );
    }

    #[tokio::test]
    async fn get_calculate_reads_query_string() {
        let request = Request::get("/api/calculate?currentAge=30&targetAge=35&targetAmount=1000&sortBy=amount&sortDirection=desc")
            .body(Body::empty())
            .expect("valid request");
        let (status, response) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_json_no_store(&response);
        let value = json_body(response).await;
        assert_eq!(value["result"]["investmentYears"], 5);
        assert_eq!(value["table"]["sortField"], "amount");
        assert_eq!(value["table"]["rows"][0]["age"], 35);
    }

    #[tokio::test]
    async fn post_calculate_reads_json_body() {
        let request = Request::post("/api/calculate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"returnRate": 7, "page": 2, "pageSize": 5}"#))
            .expect("valid request");
        let (status, response) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_json_no_store(&response);
        let value = json_body(response).await;
        assert_eq!(value["summary"]["realReturnRate"], "4.90%");
        assert_eq!(value["table"]["page"], 2);
        assert_eq!(value["table"]["firstIndex"], 6);
    }

    #[tokio::test]
    async fn validation_failure_names_field() {
        let request = Request::get("/api/calculate?inflationRate=15")
            .body(Body::empty())
            .expect("valid request");
        let (status, response) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_json_no_store(&response);
        let value = json_body(response).await;
        assert_eq!(value["kind"], "invalidRange");
        assert_eq!(value["field"], "inflationRate");
    }

    #[tokio::test]
    async fn malformed_json_body_is_a_json_bad_request() {
        let request = Request::post("/api/calculate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"page": -1}"#))
            .expect("valid request");
        let (status, response) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_json_no_store(&response);
        let value = json_body(response).await;
        assert_eq!(value["kind"], "invalidRequest");
        assert!(value.get("field").is_none());
        assert!(value["error"].as_str().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn malformed_query_is_a_json_bad_request() {
        let request = Request::get("/api/calculate?targetAge=abc")
            .body(Body::empty())
            .expect("valid request");
        let (status, response) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_json_no_store(&response);
        let value = json_body(response).await;
        assert_eq!(value["kind"], "invalidRequest");
    }

    #[tokio::test]
    async fn zero_page_size_is_rejected_before_calculation() {
        let request = Request::get("/api/calculate?pageSize=0")
            .body(Body::empty())
            .expect("valid request");
        let (status, response) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let value = json_body(response).await;
        assert_eq!(value["kind"], "invalidRequest");
    }

    #[tokio::test]
    async fn unknown_route_falls_back_to_not_found() {
        let request = Request::get("/nope")
            .body(Body::empty())
            .expect("valid request");
        let (status, response) = send(request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_json_no_store(&response);
        let value = json_body(response).await;
        assert_eq!(value["kind"], "notFound");
    }
}
