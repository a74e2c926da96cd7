//! Integration tests against a real PostgreSQL server
//!
//! Ignored by default since they need a Docker daemon.

use anyhow::Result;
use serial_test::serial;
use tablegen::{catalog, CodegenBuilder, CodegenConfig, CodegenError, Dialect, GoType};
use tablegen_db::{ConnectOptions, PgPool, Query};
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

const SCHEMA: &[&str] = &[
    "CREATE TABLE account (
        id BIGSERIAL PRIMARY KEY,
        email VARCHAR(255) NOT NULL,
        balance NUMERIC(12, 2),
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        tags TEXT[]
    )",
    "COMMENT ON TABLE account IS 'customer accounts'",
    "COMMENT ON COLUMN account.email IS 'login email'",
    "ALTER TABLE account DROP COLUMN tags",
    "CREATE TABLE order_item (id SERIAL PRIMARY KEY, qty INT2, ratio REAL, flag BOOLEAN)",
    "CREATE SCHEMA archive",
    "CREATE TABLE archive.old_account (id INT)",
    "CREATE VIEW account_email AS SELECT id, email FROM account",
];

struct Database {
    _container: ContainerAsync<Postgres>,
    port: u16,
}

async fn start_postgres() -> Result<Database> {
    let container = Postgres::default().start().await?;
    let port = container.get_host_port_ipv4(5432).await?;

    let options = ConnectOptions::new("127.0.0.1", port, "postgres", "postgres").password("postgres");
    let pool = PgPool::from_options(&options)?;
    for stmt in SCHEMA {
        Query::new(stmt).execute(&pool).await?;
    }

    Ok(Database {
        _container: container,
        port,
    })
}

fn builder(db: &Database) -> CodegenBuilder {
    CodegenBuilder::new(Dialect::Postgres, "postgres")
        .host("127.0.0.1")
        .port(db.port)
        .user("postgres")
        .password("postgres")
}

#[tokio::test]
#[ignore = "needs a Docker daemon"]
#[serial]
async fn test_every_namespace_by_default() -> Result<()> {
    let db = start_postgres().await?;
    let config = builder(&db).into_config();

    let source = catalog::connect(&config).await?;
    let group = tablegen::read_tables(source.as_ref(), &config).await?;

    // views left out
    assert_eq!(
        group.table_names().collect::<Vec<_>>(),
        vec!["account", "old_account", "order_item"]
    );
    assert_eq!(group.comment("account"), Some("customer accounts"));

    let account = group.get("account").unwrap();
    // dropped columns are gone
    let columns: Vec<&str> = account.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(columns, vec!["id", "email", "balance", "created_at"]);
    assert_eq!(account[0].native_type, "int8");
    assert!(account[0].not_null);
    assert!(!account[2].not_null);
    assert_eq!(account[1].comment, "login email");

    let order_item: Vec<GoType> = group
        .get("order_item")
        .unwrap()
        .iter()
        .map(|f| source.map_type(&f.native_type))
        .collect();
    assert_eq!(
        order_item,
        vec![GoType::Int32, GoType::Int16, GoType::Float32, GoType::Bool]
    );
    Ok(())
}

#[tokio::test]
#[ignore = "needs a Docker daemon"]
#[serial]
async fn test_other_namespace() -> Result<()> {
    let db = start_postgres().await?;
    let config = builder(&db).schema("archive").into_config();

    let source = catalog::connect(&config).await?;
    let group = tablegen::read_tables(source.as_ref(), &config).await?;
    assert_eq!(group.table_names().collect::<Vec<_>>(), vec!["old_account"]);
    Ok(())
}

#[tokio::test]
#[ignore = "needs a Docker daemon"]
#[serial]
async fn test_views_on_request() -> Result<()> {
    let db = start_postgres().await?;
    let config = builder(&db).schema("public").include_views().into_config();

    let source = catalog::connect(&config).await?;
    let group = tablegen::read_tables(source.as_ref(), &config).await?;
    assert_eq!(
        group.table_names().collect::<Vec<_>>(),
        vec!["account", "account_email", "order_item"]
    );
    Ok(())
}

#[tokio::test]
#[ignore = "needs a Docker daemon"]
#[serial]
async fn test_account_model_file() -> Result<()> {
    let db = start_postgres().await?;
    let dir = tempfile::tempdir()?;

    let report = builder(&db)
        .include_tables(&["account"])
        .package_name("entity")
        .output_dir(dir.path())
        .generate()
        .await?;
    assert_eq!(report.written(), 1);

    let content = std::fs::read_to_string(dir.path().join("account.go"))?;
    assert!(content.starts_with("package entity\n\nimport \"time\"\n\n// customer accounts\n"));
    assert!(content.contains("\tId int64 `json:\"id\" gorm:\"column:id\"` //\n"));
    assert!(content.contains("\tEmail string `json:\"email\" gorm:\"column:email\"` //login email\n"));
    assert!(content.contains("\tBalance float64 "));
    assert!(content.contains("\tCreatedAt time.Time "));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut config = CodegenConfig::new(Dialect::Postgres, "postgres");
    config.port = Some(1);
    config.output_dir = dir.path().to_path_buf();

    let err = tablegen::generate(&config).await.unwrap_err();
    assert!(matches!(err, CodegenError::Connection(_)), "{}", err);
    Ok(())
}
