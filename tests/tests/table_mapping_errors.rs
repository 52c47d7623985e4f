use adx::{Driver, MappingEntry, MappingKind, Provider, TableMappingConfig, Violation};
use adx_core::{
    async_trait,
    driver::{Operation, Response},
    Result, TableMapping,
};
use pretty_assertions::assert_eq;
use std::borrow::Cow;
use tests::{cluster::ENDPOINT, tests, AdxTest, MemoryCluster};

fn config(kind: &str) -> TableMappingConfig {
    TableMappingConfig::new(
        "events_json",
        "telemetry",
        "events",
        kind,
        vec![MappingEntry::new("a", "$.a", "string")],
    )
}

async fn unsupported_kind_is_rejected_before_any_command(test: &mut AdxTest) {
    for kind in ["Csv", "parquet", "", "Jsonl"] {
        let err = test.table_mapping().create(&config(kind)).await.unwrap_err();

        assert!(err.is_validation(), "{kind:?} => {err}");
        assert_eq!(
            err.violations(),
            [Violation::not_one_of("kind", kind, &["Json"])]
        );
    }

    assert!(test.log().is_empty());
    assert!(test.cluster.is_empty());
}

async fn empty_attributes_are_rejected_before_any_command(test: &mut AdxTest) {
    let config = TableMappingConfig::new(
        "",
        "telemetry",
        "",
        "Json",
        vec![MappingEntry::new("a", "", "string")],
    );

    let err = test.table_mapping().update(&config).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        r#"validation failed: "name" must not be empty; "table_name" must not be empty; "mapping.0.path" must not be empty"#
    );
    assert!(test.log().is_empty());
}

async fn id_delimiter_is_rejected_before_any_command(test: &mut AdxTest) {
    let config = TableMappingConfig::new(
        "a|b",
        "tele|metry",
        "events|",
        "Json",
        vec![MappingEntry::new("a", "$.a", "string")],
    );

    let err = test.table_mapping().create(&config).await.unwrap_err();

    assert!(err.is_validation(), "{err}");
    assert_eq!(
        err.violations(),
        [
            Violation::contains("name", "a|b", '|'),
            Violation::contains("database_name", "tele|metry", '|'),
            Violation::contains("table_name", "events|", '|'),
        ]
    );
    assert!(test.log().is_empty());
    assert!(test.cluster.is_empty());
}

async fn create_failure_carries_context(test: &mut AdxTest) {
    test.cluster
        .fail_next("Principal is not authorized to perform this operation");

    let err = test.table_mapping().create(&config("Json")).await.unwrap_err();

    assert!(err.is_driver());
    assert_eq!(
        err.to_string(),
        r#"error creating Mapping "events_json" (Table "events", Database "telemetry"): Principal is not authorized to perform this operation"#
    );

    // No retry and no read back after a failed write
    let log = test.log();
    assert_eq!(log.len(), 1);
    assert!(log.pop().unwrap().result.is_err());
}

async fn read_failure_carries_context(test: &mut AdxTest) {
    let state = test.table_mapping().create(&config("Json")).await.unwrap();
    test.cluster.fail_next("timed out");

    let err = test.table_mapping().read(&state.id).await.unwrap_err();

    assert!(err.is_driver());
    assert_eq!(
        err.to_string(),
        r#"error reading Mapping "events_json" (Table "events", Database "telemetry"): timed out"#
    );
}

async fn read_of_missing_mapping_is_none(test: &mut AdxTest) {
    let state = test.table_mapping().create(&config("Json")).await.unwrap();
    assert!(test.cluster.remove("telemetry", "events", "events_json"));

    let read = test.table_mapping().read(&state.id).await.unwrap();
    assert_eq!(read, None);
}

async fn read_of_malformed_payload_fails(test: &mut AdxTest) {
    test.cluster
        .insert_raw("telemetry", "events", "events_json", r#"[{"column":"a","#);

    let id = format!("{ENDPOINT}|telemetry|events|json|events_json");
    let err = test.table_mapping().read(&id).await.unwrap_err();

    assert!(err.is_invalid_result(), "{err}");
    assert!(
        err.to_string()
            .starts_with(r#"error reading Mapping "events_json" (Table "events", Database "telemetry"): invalid result: malformed mapping payload"#),
        "{err}"
    );
}

async fn delete_of_missing_mapping_fails(test: &mut AdxTest) {
    let id = format!("{ENDPOINT}|telemetry|events|json|gone");
    let err = test.table_mapping().delete(&id).await.unwrap_err();

    assert!(err.is_driver());
    assert_eq!(
        err.to_string(),
        r#"error deleting Table Mapping "gone" (Table "events", Database "telemetry"): Entity ID 'gone' of kind 'MappingPersistent' was not found."#
    );
}

async fn import_of_missing_mapping_is_not_found(test: &mut AdxTest) {
    let id = format!("{ENDPOINT}|telemetry|events|json|gone");
    let err = test.table_mapping().import(&id).await.unwrap_err();

    assert!(err.is_record_not_found(), "{err}");
    assert!(test.log().has_show());
}

async fn malformed_ids_fail_before_any_command(test: &mut AdxTest) {
    let resource = test.table_mapping();

    for id in ["", "a|b|c|json", "a|b|c|json|d|e"] {
        let err = resource.read(id).await.unwrap_err();
        assert!(err.is_invalid_id(), "{id:?} => {err}");

        let err = resource.delete(id).await.unwrap_err();
        assert!(err.is_invalid_id(), "{id:?} => {err}");

        let err = resource.import(id).await.unwrap_err();
        assert!(err.is_invalid_id(), "{id:?} => {err}");
    }

    let err = resource.read("a|b|c|csv|d").await.unwrap_err();
    assert!(err.is_invalid_id(), "{err}");

    assert!(test.log().is_empty());
}

tests!(
    unsupported_kind_is_rejected_before_any_command,
    empty_attributes_are_rejected_before_any_command,
    id_delimiter_is_rejected_before_any_command,
    create_failure_carries_context,
    read_failure_carries_context,
    read_of_missing_mapping_is_none,
    read_of_malformed_payload_fails,
    delete_of_missing_mapping_fails,
    import_of_missing_mapping_is_not_found,
    malformed_ids_fail_before_any_command,
);

/// Accepts writes but never lists anything back.
#[derive(Debug)]
struct Forgetful;

#[async_trait]
impl Driver for Forgetful {
    fn endpoint(&self) -> Cow<'_, str> {
        Cow::Borrowed(ENDPOINT)
    }

    async fn exec(&self, _database: &str, _op: Operation) -> Result<Response> {
        Ok(Response::empty())
    }
}

#[test]
fn create_fails_when_read_back_finds_nothing() {
    let provider = Provider::new(Forgetful);

    let err = tests::block_on(provider.table_mapping().create(&config("Json"))).unwrap_err();

    assert!(err.is_record_not_found(), "{err}");
    assert!(
        err.to_string().contains("read after create returned no rows"),
        "{err}"
    );
}

#[test]
fn read_with_foreign_endpoint_uses_provider_cluster() {
    let mut test = AdxTest::with_cluster(MemoryCluster::new());

    tests::block_on(async {
        let state = test.table_mapping().create(&config("Json")).await.unwrap();

        let foreign = state
            .id
            .replacen(ENDPOINT, "https://other.kusto.windows.net", 1);
        let read = test.table_mapping().read(&foreign).await.unwrap().unwrap();

        assert_eq!(read.mapping, state.mapping);
        assert_eq!(read.id, foreign);
    });

    assert_eq!(test.log().len(), 3);
}

/// Lists every mapping under a different database and table than asked for.
#[derive(Debug)]
struct Renamed;

#[async_trait]
impl Driver for Renamed {
    fn endpoint(&self) -> Cow<'_, str> {
        Cow::Borrowed(ENDPOINT)
    }

    async fn exec(&self, _database: &str, op: Operation) -> Result<Response> {
        Response::from_records(&[TableMapping {
            name: op.name().to_string(),
            kind: MappingKind::Json,
            mapping: r#"[{"column":"a","path":"$.a","datatype":"string"}]"#.to_string(),
            last_updated_on: None,
            database: "RemoteDb".to_string(),
            table: "RemoteTable".to_string(),
        }])
    }
}

#[test]
fn read_reports_database_and_table_of_the_remote_row() {
    let provider = Provider::new(Renamed);
    let id = format!("{ENDPOINT}|telemetry|events|json|events_json");

    let state = tests::block_on(provider.table_mapping().read(&id))
        .unwrap()
        .unwrap();

    assert_eq!(state.id, id);
    assert_eq!(state.database_name, "RemoteDb");
    assert_eq!(state.table_name, "RemoteTable");
}
