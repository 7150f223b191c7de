use chrono::NaiveDate;
use comedor_lib::{ApiErrorKind, BiClient, Client, DashboardKpis, DateRange};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn range() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
    )
}

async fn mount_view(server: &MockServer, view: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/bi/{}", view)))
        .and(query_param("desde", "2025-05-01"))
        .and(query_param("hasta", "2025-05-31"))
        .respond_with(
            ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/json"),
        )
        .mount(server)
        .await;
}

fn ventas() -> serde_json::Value {
    json!([
        {"fecha": "2025-05-01", "tipo_comida": "ALMUERZO", "raciones_servidas": 120,
         "raciones_becados": 20, "raciones_regulares": 100, "ingresos_total": 600.0},
        {"fecha": "2025-05-02", "tipo_comida": "CENA", "raciones_servidas": 80,
         "raciones_becados": 10, "raciones_regulares": 70, "ingresos_total": 400.5}
    ])
}

fn asistencia() -> serde_json::Value {
    json!([
        {"fecha": "2025-05-01", "tipo_comida": "ALMUERZO", "raciones_becados": 20, "becas_activas": 25},
        {"fecha": "2025-05-02", "tipo_comida": "CENA", "raciones_becados": 10, "becas_activas": 25}
    ])
}

#[tokio::test]
async fn fetch_aggregates_all_three_views() {
    let mock_server = MockServer::start().await;
    mount_view(&mock_server, "ventas-diarias", 200, ventas()).await;
    mount_view(
        &mock_server,
        "costos",
        200,
        json!([
            {"fecha": "2025-05-01", "tipo_comida": "ALMUERZO", "raciones_servidas": 120,
             "costo_promedio_insumo": 1.5, "costo_total_insumos": 180.0},
            {"fecha": "2025-05-02", "tipo_comida": "CENA", "raciones_servidas": 80,
             "costo_promedio_insumo": 2.5, "costo_total_insumos": 200.0}
        ]),
    )
    .await;
    mount_view(&mock_server, "asistencia-becados", 200, asistencia()).await;

    let bi = BiClient::new(Client::new(&mock_server.uri()).unwrap());
    let kpis = DashboardKpis::fetch(&bi, &range()).await.unwrap();

    assert_eq!(
        kpis,
        DashboardKpis {
            total_ingresos: 1000.5,
            total_raciones: 200,
            costo_promedio: 2.0,
            total_becados: 30,
        }
    );
}

#[tokio::test]
async fn fetch_fails_when_one_view_fails() {
    let mock_server = MockServer::start().await;
    mount_view(&mock_server, "ventas-diarias", 200, ventas()).await;
    mount_view(
        &mock_server,
        "costos",
        500,
        json!({"error": "Error al consultar datos de costos"}),
    )
    .await;
    mount_view(&mock_server, "asistencia-becados", 200, asistencia()).await;

    let bi = BiClient::new(Client::new(&mock_server.uri()).unwrap());
    let err = DashboardKpis::fetch(&bi, &range()).await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Http);
    assert_eq!(err.status, 500);
    assert_eq!(err.message, "Error al consultar datos de costos");
}
