use comedor_api::types::{
    Compra, Id, Insumo, Paginated, Plato, ProveedorRef, Reserva, VentasDiarias,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_insumos_page() {
    let json = load_fixture("insumos_page.json");
    let resp: Paginated<Vec<Insumo>> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].nombre, "Arroz");
    assert_eq!(resp.data[0].vida_util_dias, Some(365));
    assert_eq!(resp.data[1].sku, None);

    assert_eq!(resp.meta.page, 2);
    assert_eq!(resp.meta.limit, 10);
    assert_eq!(resp.meta.total_records, 12);
    assert_eq!(resp.meta.total_pages, 2);
    assert!(resp.meta.has_previous_page);
    assert!(!resp.meta.has_next_page);
    assert_eq!(resp.meta.previous_page(), Some(1));
    assert_eq!(resp.meta.next_page(), None);
}

#[test]
fn deserialize_plato_with_string_price() {
    let json = load_fixture("plato.json");
    let plato: Plato = serde_json::from_str(&json).unwrap();
    assert_eq!(plato.id, Id::Num(5));
    assert_eq!(plato.precio.as_ref().map(|p| p.value()), Some(12.5));
    assert_eq!(plato.disponible, Some(true));
    assert_eq!(plato.imagen, None);
}

#[test]
fn deserialize_reservas_with_nested_item() {
    let json = load_fixture("reservas_page.json");
    let resp: Paginated<Vec<Reserva>> = serde_json::from_str(&json).unwrap();
    let reserva = &resp.data[0];
    assert_eq!(reserva.id, Id::Text("7f1c".to_string()));
    assert_eq!(reserva.persona_id, Some(Id::from("u-17")));

    let item = reserva.item_menu.as_ref().unwrap();
    assert_eq!(item.nombre(), "Lentejas guisadas");
    assert_eq!(item.raciones_disponibles, Some(33));
    assert_eq!(item.menu.as_ref().unwrap().fecha, "2025-05-12");
}

#[test]
fn deserialize_compras_with_both_supplier_shapes() {
    let json = load_fixture("compras_page.json");
    let resp: Paginated<Vec<Compra>> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data[0].total.value(), 1520.75);
    assert_eq!(resp.data[1].total.value(), 310.0);
    assert!(matches!(
        resp.data[0].proveedor,
        Some(ProveedorRef::Expanded { .. })
    ));
    assert_eq!(
        resp.data[1].proveedor.as_ref().map(|p| p.nombre()),
        Some("Lacteos Sur")
    );
    assert!(resp.meta.has_next_page);
    assert_eq!(resp.meta.next_page(), Some(2));
}

#[test]
fn deserialize_bi_rows() {
    let json = load_fixture("ventas_diarias.json");
    let rows: Vec<VentasDiarias> = serde_json::from_str(&json).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].raciones_servidas, 310);
    assert_eq!(rows[1].ingresos_total, 990.0);
}

#[test]
fn deserialize_missing_meta_returns_error() {
    let json = r#"{"data": []}"#;
    assert!(serde_json::from_str::<Paginated<Vec<Insumo>>>(json).is_err());
}
