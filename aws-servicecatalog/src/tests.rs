use std::{collections::HashMap, fs, path::Path};

use serde_json::json;
use tfbind::{
    BindingError, Lifecycle, MetaArguments, Scope, Stack, TerraformProvider, TerraformResource,
    codegen::{Generator, GeneratorOptions},
    schema::ProvidersSchema,
};

use crate::{
    servicecatalog_product::{
        ServicecatalogProductProvisioningArtifactParameters, ServicecatalogProductTimeouts,
    },
    servicecatalog_provisioned_product::{
        ServicecatalogProvisionedProductProvisioningParameters,
        ServicecatalogProvisionedProductStackSetProvisioningPreferences,
    },
    *,
};

fn scope() -> Scope {
    Scope::root("catalog")
}

fn portfolio() -> ServicecatalogPortfolio {
    ServicecatalogPortfolio::new(
        &scope(),
        "main",
        ServicecatalogPortfolioConfig::builder()
            .name("platform")
            .provider_name("platform-team")
            .build()
            .unwrap(),
    )
    .unwrap()
}

fn parameter(key: &str, value: &str) -> ServicecatalogProvisionedProductProvisioningParameters {
    ServicecatalogProvisionedProductProvisioningParameters::builder()
        .key(key)
        .value(value)
        .build()
        .unwrap()
}

#[test]
fn test_required_only_leaves_optionals_absent() {
    let portfolio = portfolio();
    assert_eq!(portfolio.name(), "platform");
    assert_eq!(portfolio.provider_name(), "platform-team");
    assert!(portfolio.description().is_none());
    assert!(portfolio.id().is_none());
    assert!(portfolio.tags().is_none());
    assert!(portfolio.tags_all().is_none());
    assert!(portfolio.timeouts().is_none());

    assert_eq!(
        portfolio.synthesize_attributes().unwrap(),
        json!({ "name": "platform", "provider_name": "platform-team" })
    );
}

#[test]
fn test_required_only_configs_leave_every_optional_absent() {
    let scope = scope();

    let tag_option = ServicecatalogTagOption::new(
        &scope,
        "env",
        ServicecatalogTagOptionConfig::builder()
            .key("env")
            .value("prod")
            .build()
            .unwrap(),
    )
    .unwrap();
    let product = ServicecatalogProduct::new(
        &scope,
        "app",
        ServicecatalogProductConfig::builder()
            .name("app")
            .owner("team")
            .r#type("CLOUD_FORMATION_TEMPLATE")
            .provisioning_artifact_parameters(
                ServicecatalogProductProvisioningArtifactParameters::builder()
                    .template_url("https://example.com/v1.yaml")
                    .build(),
            )
            .build()
            .unwrap(),
    )
    .unwrap();
    let provisioned = ServicecatalogProvisionedProduct::new(
        &scope,
        "app_prod",
        ServicecatalogProvisionedProductConfig::builder()
            .name("app-prod")
            .build()
            .unwrap(),
    )
    .unwrap();
    let share = ServicecatalogPortfolioShare::new(
        &scope,
        "share",
        ServicecatalogPortfolioShareConfig::builder()
            .portfolio_id("port-abc123")
            .principal_id("123456789012")
            .r#type("ACCOUNT")
            .build()
            .unwrap(),
    )
    .unwrap();
    let launch_paths = DataAwsServicecatalogLaunchPaths::new(
        &scope,
        "paths",
        DataAwsServicecatalogLaunchPathsConfig::builder()
            .product_id("prod-abc123")
            .build()
            .unwrap(),
    )
    .unwrap();
    let lookup = DataAwsServicecatalogPortfolio::new(
        &scope,
        "existing",
        DataAwsServicecatalogPortfolioConfig::builder()
            .id("port-abc123")
            .build()
            .unwrap(),
    )
    .unwrap();

    let cases: [(&dyn TerraformResource, Vec<bool>, serde_json::Value); 6] = [
        (
            &tag_option,
            vec![
                tag_option.active().is_none(),
                tag_option.id().is_none(),
                tag_option.timeouts().is_none(),
            ],
            json!({ "key": "env", "value": "prod" }),
        ),
        (
            &product,
            vec![
                product.accept_language().is_none(),
                product.description().is_none(),
                product.distributor().is_none(),
                product.id().is_none(),
                product.support_description().is_none(),
                product.support_email().is_none(),
                product.support_url().is_none(),
                product.tags().is_none(),
                product.tags_all().is_none(),
                product.timeouts().is_none(),
            ],
            json!({
                "name": "app",
                "owner": "team",
                "type": "CLOUD_FORMATION_TEMPLATE",
                "provisioning_artifact_parameters": {
                    "template_url": "https://example.com/v1.yaml"
                }
            }),
        ),
        (
            &provisioned,
            vec![
                provisioned.accept_language().is_none(),
                provisioned.id().is_none(),
                provisioned.ignore_errors().is_none(),
                provisioned.notification_arns().is_none(),
                provisioned.path_id().is_none(),
                provisioned.path_name().is_none(),
                provisioned.product_id().is_none(),
                provisioned.product_name().is_none(),
                provisioned.provisioning_artifact_id().is_none(),
                provisioned.provisioning_artifact_name().is_none(),
                provisioned.retain_physical_resources().is_none(),
                provisioned.tags().is_none(),
                provisioned.tags_all().is_none(),
                provisioned.provisioning_parameters().is_none(),
                provisioned.stack_set_provisioning_preferences().is_none(),
                provisioned.timeouts().is_none(),
            ],
            json!({ "name": "app-prod" }),
        ),
        (
            &share,
            vec![
                share.accept_language().is_none(),
                share.id().is_none(),
                share.share_principals().is_none(),
                share.share_tag_options().is_none(),
                share.wait_for_acceptance().is_none(),
                share.timeouts().is_none(),
            ],
            json!({
                "portfolio_id": "port-abc123",
                "principal_id": "123456789012",
                "type": "ACCOUNT"
            }),
        ),
        (
            &launch_paths,
            vec![
                launch_paths.accept_language().is_none(),
                launch_paths.id().is_none(),
                launch_paths.timeouts().is_none(),
            ],
            json!({ "product_id": "prod-abc123" }),
        ),
        (
            &lookup,
            vec![
                lookup.accept_language().is_none(),
                lookup.tags().is_none(),
                lookup.timeouts().is_none(),
            ],
            json!({ "id": "port-abc123" }),
        ),
    ];

    for (construct, absent, expected) in cases {
        let address = construct.fqn();
        assert!(absent.iter().all(|&none| none), "{address}: {absent:?}");
        let attributes = construct.synthesize_attributes().unwrap();
        assert_eq!(attributes, expected, "{address}");
    }
}

#[test]
fn test_missing_required_property() {
    let err = ServicecatalogPortfolioConfig::builder()
        .name("platform")
        .build()
        .unwrap_err();
    match err {
        BindingError::MissingRequiredProperty { owner, property } => {
            assert_eq!(owner, "ServicecatalogPortfolioConfig");
            assert_eq!(property, "provider_name");
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = ServicecatalogProductConfig::builder()
        .name("app")
        .owner("team")
        .r#type("CLOUD_FORMATION_TEMPLATE")
        .build()
        .unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Missing required property 'provisioning_artifact_parameters'"));
    assert!(message.ends_with(" in ServicecatalogProductConfig"));

    let err = ServicecatalogProvisionedProductProvisioningParameters::builder()
        .value("v")
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        BindingError::MissingRequiredProperty { property, .. } if property == "key"
    ));
}

#[test]
fn test_invalid_construct_id() {
    let config = ServicecatalogTagOptionConfig::builder()
        .key("env")
        .value("prod")
        .build()
        .unwrap();
    let err = ServicecatalogTagOption::new(&scope(), "a/b", config).unwrap_err();
    assert!(matches!(err, BindingError::InvalidConstructId { .. }));
}

#[test]
fn test_put_then_read_back() {
    let mut product = ServicecatalogProduct::new(
        &scope(),
        "app",
        ServicecatalogProductConfig::builder()
            .name("app")
            .owner("team")
            .r#type("CLOUD_FORMATION_TEMPLATE")
            .provisioning_artifact_parameters(
                ServicecatalogProductProvisioningArtifactParameters::builder()
                    .template_url("https://example.com/v1.yaml")
                    .build(),
            )
            .build()
            .unwrap(),
    )
    .unwrap();

    let v2 = ServicecatalogProductProvisioningArtifactParameters::builder()
        .name("v2")
        .template_url("https://example.com/v2.yaml")
        .disable_template_validation(true)
        .build();
    product.put_provisioning_artifact_parameters(v2.clone());
    assert_eq!(product.provisioning_artifact_parameters(), &v2);

    let timeouts = ServicecatalogProductTimeouts::builder()
        .create("10m")
        .delete("5m")
        .build();
    product.put_timeouts(timeouts.clone());
    assert_eq!(product.timeouts(), Some(&timeouts));
    assert_eq!(product.timeouts().and_then(|t| t.read.as_deref()), None);

    product.reset_timeouts();
    assert!(product.timeouts().is_none());

    product.set_type("MARKETPLACE");
    assert_eq!(product.r#type(), "MARKETPLACE");
}

#[test]
fn test_set_and_reset_attributes() {
    let mut portfolio = portfolio();
    portfolio.set_description("Shared platform products");
    portfolio.set_tags(HashMap::from([("team".to_string(), "platform".to_string())]));
    assert_eq!(portfolio.description(), Some("Shared platform products"));
    let team = portfolio.tags().and_then(|tags| tags.get("team"));
    assert_eq!(team.map(String::as_str), Some("platform"));

    portfolio.reset_description();
    assert!(portfolio.description().is_none());
    assert!(portfolio.tags().is_some());
}

#[test]
fn test_computed_attribute_tokens() {
    let portfolio = portfolio();
    assert_eq!(portfolio.arn(), "${aws_servicecatalog_portfolio.main.arn}");
    assert_eq!(
        portfolio.created_time(),
        "${aws_servicecatalog_portfolio.main.created_time}"
    );

    let share = ServicecatalogPortfolioShare::new(
        &scope(),
        "share",
        ServicecatalogPortfolioShareConfig::builder()
            .portfolio_id(portfolio.arn())
            .principal_id("123456789012")
            .r#type("ACCOUNT")
            .build()
            .unwrap(),
    )
    .unwrap();
    assert_eq!(
        share.portfolio_id(),
        "${aws_servicecatalog_portfolio.main.arn}"
    );
    assert_eq!(
        share.accepted(),
        "${aws_servicecatalog_portfolio_share.share.accepted}"
    );
}

#[test]
fn test_list_references() {
    let mut product = ServicecatalogProvisionedProduct::new(
        &scope(),
        "app",
        ServicecatalogProvisionedProductConfig::builder()
            .name("app-prod")
            .build()
            .unwrap(),
    )
    .unwrap();

    // Nothing configured: the length is unknown, any index is accepted.
    assert_eq!(product.provisioning_parameters_ref().len(), None);
    assert!(product.provisioning_parameters_ref().get(5).is_ok());

    product.put_provisioning_parameters(vec![parameter("Env", "prod"), parameter("Size", "m")]);
    let params = product.provisioning_parameters_ref();
    assert_eq!(params.len(), Some(2));
    assert_eq!(params.get(1).unwrap(), params.get(1).unwrap());
    assert_eq!(
        params.get(1).unwrap().key(),
        "${aws_servicecatalog_provisioned_product.app.provisioning_parameters[1].key}"
    );
    assert!(matches!(
        params.get(2),
        Err(BindingError::IndexOutOfRange { index: 2, len: 2, .. })
    ));

    let outputs = product.outputs();
    let first = outputs.get(0).unwrap();
    assert_eq!(first, outputs.get(0).unwrap());
    assert_eq!(
        first.value(),
        "${tolist(aws_servicecatalog_provisioned_product.app.outputs)[0].value}"
    );
}

#[test]
fn test_data_source_nested_lists() {
    let paths = DataAwsServicecatalogLaunchPaths::new(
        &scope(),
        "paths",
        DataAwsServicecatalogLaunchPathsConfig::builder()
            .product_id("prod-abc123")
            .build()
            .unwrap(),
    )
    .unwrap();

    assert_eq!(paths.fqn(), "data.aws_servicecatalog_launch_paths.paths");
    let constraint = paths
        .summaries()
        .get(0)
        .unwrap()
        .constraint_summaries()
        .get(1)
        .unwrap();
    assert_eq!(
        constraint.r#type(),
        "${data.aws_servicecatalog_launch_paths.paths.summaries[0].constraint_summaries[1].type}"
    );
}

#[test]
fn test_config_from_json() {
    let config: ServicecatalogTagOptionConfig = serde_json::from_value(json!({
        "key": "env",
        "value": "prod",
        "count": 2,
        "timeouts": { "create": "3m" }
    }))
    .unwrap();
    assert_eq!(config.meta.count, Some(2));
    assert_eq!(config.active, None);
    assert_eq!(
        config.timeouts.as_ref().and_then(|t| t.create.as_deref()),
        Some("3m")
    );

    let err = serde_json::from_value::<ServicecatalogTagOptionConfig>(json!({ "key": "env" }))
        .unwrap_err();
    assert!(err.to_string().contains("value"));
}

#[test]
fn test_stack_synthesis() {
    let mut stack = Stack::new("catalog");
    let scope = stack.scope();

    let default = AwsProvider::new(
        &scope,
        "aws",
        AwsProviderConfig::builder().region("eu-west-1").build(),
    )
    .unwrap();
    let us = AwsProvider::new(
        &scope,
        "aws_us",
        AwsProviderConfig::builder()
            .alias("us")
            .region("us-east-1")
            .build(),
    )
    .unwrap();
    assert_eq!(us.fqn(), "aws.us");

    let portfolio = portfolio();
    let mut tag = ServicecatalogTagOption::new(
        &scope,
        "env",
        ServicecatalogTagOptionConfig::builder()
            .key("env")
            .value("prod")
            .build()
            .unwrap(),
    )
    .unwrap();
    *tag.meta_mut() = MetaArguments::default()
        .with_provider(&us)
        .depends_on(&portfolio)
        .with_lifecycle(Lifecycle {
            prevent_destroy: Some(true),
            ..Default::default()
        });

    let lookup = DataAwsServicecatalogPortfolio::new(
        &scope,
        "existing",
        DataAwsServicecatalogPortfolioConfig::builder()
            .id("port-abc123")
            .build()
            .unwrap(),
    )
    .unwrap();

    stack.add_provider(&default).unwrap();
    stack.add_provider(&us).unwrap();
    stack.add(&portfolio).unwrap();
    stack.add(&tag).unwrap();
    stack.add(&lookup).unwrap();
    assert!(stack.add(&portfolio).is_err());

    let doc = stack.synth();
    assert_eq!(
        doc["terraform"]["required_providers"]["aws"]["source"],
        "hashicorp/aws"
    );
    assert_eq!(
        doc["provider"]["aws"],
        json!([
            { "region": "eu-west-1" },
            { "alias": "us", "region": "us-east-1" }
        ])
    );
    assert_eq!(
        doc["resource"]["aws_servicecatalog_tag_option"]["env"],
        json!({
            "key": "env",
            "value": "prod",
            "provider": "aws.us",
            "depends_on": ["aws_servicecatalog_portfolio.main"],
            "lifecycle": { "prevent_destroy": true }
        })
    );
    assert_eq!(
        doc["data"]["aws_servicecatalog_portfolio"]["existing"],
        json!({ "id": "port-abc123" })
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.tf.json");
    stack.write(&path).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("port-abc123"));
}

#[test]
fn test_stack_set_preferences_numbers() {
    let mut product = ServicecatalogProvisionedProduct::new(
        &scope(),
        "fleet",
        ServicecatalogProvisionedProductConfig::builder()
            .name("fleet")
            .build()
            .unwrap(),
    )
    .unwrap();
    product.put_stack_set_provisioning_preferences(
        ServicecatalogProvisionedProductStackSetProvisioningPreferences::builder()
            .regions(vec!["eu-west-1".to_string(), "us-east-1".to_string()])
            .max_concurrency_count(2.0)
            .build(),
    );

    assert_eq!(
        product.synthesize_attributes().unwrap()["stack_set_provisioning_preferences"],
        json!({ "max_concurrency_count": 2.0, "regions": ["eu-west-1", "us-east-1"] })
    );
}

#[test]
fn test_generated_bindings_are_up_to_date() {
    let schema = ProvidersSchema::parse(crate::SCHEMA_JSON).unwrap();
    let options = GeneratorOptions::new("aws")
        .with_resources(["aws_servicecatalog_*"])
        .with_data_sources(["aws_servicecatalog_*"]);
    let files = Generator::new(options).generate(&schema).unwrap();
    assert_eq!(files.len(), 9);

    let generated_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/generated");
    for file in files {
        let checked_in = fs::read_to_string(generated_dir.join(&file.path)).unwrap();
        assert!(
            file.contents == checked_in,
            "{} is out of date, run `tfgen generate`",
            file.path.display()
        );
    }
}

#[test]
fn test_generated_module_is_skipped_by_rustfmt() {
    let lib = include_str!("lib.rs");
    assert!(lib.contains("#[rustfmt::skip]\nmod generated;"));
}
