//! Generators composed from other registered generators.

use crate::error::GeneratorError;
use crate::registry::Resolver;

const AVATAR_PREFIX: &str = "https://s3.amazonaws.com/uifaces/faces/twitter/";
const AVATAR_SUFFIX: &str = "/128.jpg";

/// `"<name.first> <name.last>"`
pub fn name(r: &mut Resolver<'_>, _args: Option<&[String]>) -> Result<String, GeneratorError> {
    let first = r.get("name.first")?;
    let last = r.get("name.last")?;
    Ok(format!("{first} {last}"))
}

/// `"<username>@<domain>"`
pub fn email(r: &mut Resolver<'_>, _args: Option<&[String]>) -> Result<String, GeneratorError> {
    let username = r.get("username")?;
    let host = r.get("domain")?;
    Ok(format!("{username}@{host}"))
}

/// `"<domain.name>.<domain.tld>"`
pub fn domain(r: &mut Resolver<'_>, _args: Option<&[String]>) -> Result<String, GeneratorError> {
    let name = r.get("domain.name")?;
    let tld = r.get("domain.tld")?;
    Ok(format!("{name}.{tld}"))
}

pub fn avatar(r: &mut Resolver<'_>, _args: Option<&[String]>) -> Result<String, GeneratorError> {
    let user = r.get("username")?;
    Ok(format!("{AVATAR_PREFIX}{user}{AVATAR_SUFFIX}"))
}
