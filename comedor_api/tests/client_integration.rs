use comedor_api::types::{Insumo, InsumoInput, NewBeca, Plato, Reserva};
use comedor_api::{
    ApiErrorKind, BiClient, Client, DateRange, InsumoQuery, Method, PagedQuery, Reply,
    RequestOptions,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn json_response(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/json")
}

fn client_for(server: &MockServer) -> Client {
    Client::new(&format!("{}/api/v1/", server.uri())).unwrap()
}

#[tokio::test]
async fn paginated_list_keeps_meta_and_exact_query() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/insumos"))
        .respond_with(json_response(200, &load_fixture("insumos_page.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = InsumoQuery::default()
        .with_page(2)
        .with_limit(10)
        .with_unidad("kg");
    let page = client.insumos().get_paginated(&query).await.unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.meta.total_records, 12);

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.query(), Some("page=2&limit=10&unidad=kg"));
}

#[tokio::test]
async fn envelope_data_matches_unwrapped_call() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/insumos"))
        .respond_with(json_response(200, &load_fixture("insumos_page.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let raw = client
        .get_with_meta::<Vec<Insumo>>("/insumos")
        .await
        .unwrap();
    let data = client.get_data::<Vec<Insumo>>("/insumos").await.unwrap();
    assert_eq!(raw.data, data);

    let all = client.insumos().get_all().await.unwrap();
    assert_eq!(all, data);
}

#[tokio::test]
async fn get_by_id_is_idempotent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/platos/5"))
        .respond_with(json_response(200, &load_fixture("plato.json")))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let first: Plato = client.platos().get_by_id(5).await.unwrap();
    let second: Plato = client.platos().get_by_id(5).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.nombre, "Lentejas guisadas");
}

#[tokio::test]
async fn create_sends_json_body_with_content_type() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/becas"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "personaId": "p-1",
            "tipo": "COMPLETA",
            "estado": "ACTIVA",
            "vigenteDesde": "2025-03-01",
            "cuotaDiaria": 2
        })))
        .respond_with(json_response(
            201,
            r#"{"id": 8, "personaId": "p-1", "tipo": "COMPLETA", "estado": "ACTIVA", "vigenteDesde": "2025-03-01", "vigenteHasta": null, "cuotaDiaria": 2}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let beca = client
        .becas()
        .create(&NewBeca {
            persona_id: "p-1".into(),
            tipo: "COMPLETA".to_string(),
            estado: "ACTIVA".to_string(),
            vigente_desde: "2025-03-01".to_string(),
            vigente_hasta: None,
            cuota_diaria: 2,
        })
        .await
        .unwrap();
    assert_eq!(beca.cuota_diaria, 2);
}

#[tokio::test]
async fn update_sends_partial_payload() {
    let mock_server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/insumos/11"))
        .and(body_json(json!({ "vidaUtilDias": 30 })))
        .respond_with(json_response(
            200,
            r#"{"id": 11, "nombre": "Arroz", "unidad": "kg", "vidaUtilDias": 30}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let patch = InsumoInput {
        vida_util_dias: Some(30),
        ..Default::default()
    };
    let insumo = client.insumos().update(11, &patch).await.unwrap();
    assert_eq!(insumo.vida_util_dias, Some(30));
}

#[tokio::test]
async fn delete_resolves_on_no_content() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/proveedores/4"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.proveedores().delete(4).await.is_ok());

    let reply = client
        .request::<serde_json::Value>("/proveedores/4", RequestOptions::new(Method::DELETE))
        .await
        .unwrap();
    assert_eq!(reply, Reply::NoContent);
}

#[tokio::test]
async fn reservation_actions_post_without_body() {
    let mock_server = MockServer::start().await;
    for action in ["confirmar", "cancelar"] {
        let estado = if action == "confirmar" {
            "CONFIRMADA"
        } else {
            "CANCELADA"
        };
        Mock::given(method("POST"))
            .and(path(format!("/api/v1/reservas/7/{}", action)))
            .respond_with(json_response(
                200,
                &format!(r#"{{"id": 7, "estado": "{}"}}"#, estado),
            ))
            .mount(&mock_server)
            .await;
    }

    let client = client_for(&mock_server);
    let confirmed: Reserva = client.reservas().confirmar(7).await.unwrap();
    let cancelled: Reserva = client.reservas().cancelar(7).await.unwrap();
    assert_eq!(confirmed.estado, "CONFIRMADA");
    assert_eq!(cancelled.estado, "CANCELADA");

    let received = mock_server.received_requests().await.unwrap();
    assert!(received.iter().all(|r| r.body.is_empty()));
}

#[tokio::test]
async fn json_error_body_is_surfaced() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/pagos"))
        .respond_with(json_response(
            400,
            r#"{"statusCode": 400, "message": ["monto must be a positive number"], "error": "Bad Request"}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .post::<serde_json::Value, _>("/pagos", Some(&json!({ "monto": -1 })))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Http);
    assert_eq!(err.status, 400);
    assert_eq!(err.status_code, Some(400));
    assert_eq!(err.message, "monto must be a positive number");
    assert_eq!(err.error.as_deref(), Some("Bad Request"));
}

#[tokio::test]
async fn html_404_is_reported_as_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/no-existe"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_raw("<!DOCTYPE html><html><body>Cannot GET</body></html>", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get::<serde_json::Value>("/no-existe")
        .await
        .unwrap_err();
    assert_eq!(err.status, 404);
    assert_eq!(err.kind, ApiErrorKind::NotFound);
    assert!(err.message.contains("not found"));
    assert!(!err.message.contains("CORS"));
}

#[tokio::test]
async fn html_on_success_is_an_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/menus"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.menus().get_all().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::UnexpectedHtml);
    assert_eq!(err.status, 200);
}

#[tokio::test]
async fn malformed_json_has_status_zero() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/platos/1"))
        .respond_with(json_response(200, "{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.platos().get_by_id(1).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::MalformedJson);
    assert_eq!(err.status, 0);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Nothing listens on port 1.
    let client = Client::new("http://127.0.0.1:1/api/v1").unwrap();
    let err = client.platos().get_all().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Network);
    assert_eq!(err.status, 0);
}

#[tokio::test]
async fn sub_collections_return_bare_arrays() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/insumos/bajo-stock"))
        .respond_with(json_response(
            200,
            r#"[{"id": 12, "nombre": "Leche", "unidad": "litro"}]"#,
        ))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/menus/semanal"))
        .respond_with(json_response(
            200,
            r#"[{"id": 3, "fecha": "2025-05-12", "comida": "ALMUERZO"}]"#,
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(client.insumos().get_bajo_stock().await.unwrap().len(), 1);
    assert_eq!(client.menus().get_semanal().await.unwrap()[0].fecha, "2025-05-12");
}

#[tokio::test]
async fn bi_routes_forward_date_range() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bi/ventas-diarias"))
        .and(query_param("desde", "2025-05-01"))
        .and(query_param("hasta", "2025-05-02"))
        .respond_with(json_response(200, &load_fixture("ventas_diarias.json")))
        .mount(&mock_server)
        .await;

    let bi = BiClient::new(Client::new(&mock_server.uri()).unwrap());
    let range = DateRange::new(
        chrono::NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
    );
    let rows = bi.ventas_diarias(&range).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].fecha, "2025-05-01");
}

#[tokio::test]
async fn bi_server_error_is_surfaced() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bi/costos"))
        .respond_with(json_response(
            500,
            r#"{"error": "Error al consultar datos de costos"}"#,
        ))
        .mount(&mock_server)
        .await;

    let bi = BiClient::new(Client::new(&mock_server.uri()).unwrap());
    let err = bi.costos(&DateRange::default()).await.unwrap_err();
    assert_eq!(err.status, 500);
    assert_eq!(err.message, "Error al consultar datos de costos");
}
