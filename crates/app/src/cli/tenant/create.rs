use clap::Args;

use bazaar_app::{
    database::{self, Db},
    domain::{
        read_policy::ReadPolicy,
        tenants::{PgTenantsService, TenantsService, records::NewTenant},
    },
};

#[derive(Debug, Args)]
pub(crate) struct CreateTenantArgs {
    /// Tenant display name
    #[arg(long)]
    name: String,

    /// Tenant domain, unique across the platform
    #[arg(long)]
    domain: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

pub(crate) async fn run(args: CreateTenantArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgTenantsService::new(Db::new(pool), ReadPolicy::Propagate);

    let tenant = service
        .create_tenant(NewTenant {
            name: args.name,
            domain: args.domain,
        })
        .await
        .map_err(|error| format!("failed to create tenant: {error}"))?;

    println!("tenant_uuid: {}", tenant.uuid);
    println!("tenant_name: {}", tenant.name);
    println!("tenant_domain: {}", tenant.domain);

    Ok(())
}
