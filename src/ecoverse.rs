//! Domain operations against the ecoverse API.
//!
//! Each operation shapes its variables, executes the matching document from
//! [`crate::graphql::operations`], routes the returned error list through
//! [`ensure_no_errors`], and returns the relevant payload field. Operations
//! gated on a named lookup (challenge by name, host info) short-circuit to
//! an empty result when the lookup comes back empty.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::auth::{AuthConfigFactory, AuthenticationClient, GrantOutcome, GrantType, TokenStore};
use crate::config::ClientConfig;
use crate::error::ensure_no_errors;
use crate::graphql::{operations as op, GraphqlClient};

/// Client for the ecoverse GraphQL API.
///
/// Holds the GraphQL executor, the OAuth2 grant client and the shared
/// bearer store that connects them. All methods take `&self`; concurrent
/// calls are independent.
#[derive(Clone)]
pub struct EcoverseClient {
    graphql: GraphqlClient,
    auth: AuthenticationClient,
    tokens: TokenStore,
}

impl EcoverseClient {
    pub fn new(config: ClientConfig, auth_config: AuthConfigFactory) -> Result<Self> {
        let tokens = TokenStore::new();
        let auth = AuthenticationClient::with_issuer(config.token_issuer, auth_config)?;
        let graphql = GraphqlClient::new(config.graphql_endpoint, tokens.clone())?;
        Ok(Self {
            graphql,
            auth,
            tokens,
        })
    }

    /// The bearer store shared with the GraphQL executor.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Run the given grant flow and install the access token for subsequent
    /// requests.
    ///
    /// At this boundary a provider rejection is an error: the caller asked
    /// for a usable session, not a grant outcome to branch on. Use
    /// [`AuthenticationClient`] directly to handle rejections as values.
    pub async fn authenticate(&self, grant: GrantType) -> Result<()> {
        let outcome = match grant {
            GrantType::PasswordCredentials => self.auth.authenticate_password_credentials().await?,
            GrantType::ClientCredentials => self.auth.authenticate_client_credentials().await?,
        };
        match outcome {
            GrantOutcome::Granted(token) => {
                self.tokens.swap(token.access_token).await;
                info!(grant_type = %grant.as_str(), "authenticated");
                Ok(())
            }
            GrantOutcome::Denied(err) => bail!("token grant rejected: {}", err.error),
        }
    }

    /// Cheap connectivity probe: true when the ecoverse name query comes
    /// back without errors.
    pub async fn test_connection(&self) -> bool {
        match self.graphql.execute(op::ECOVERSE_NAME, json!({})).await {
            Ok(response) => response.errors.is_empty(),
            Err(_) => false,
        }
    }

    /// Look a challenge up by name, case-insensitively.
    async fn get_challenge(&self, name: &str) -> Result<Option<Value>> {
        let response = self.graphql.execute(op::CHALLENGES, json!({})).await?;
        ensure_no_errors(&response.errors)?;

        let challenges = match response.take_field("challenges") {
            Some(Value::Array(list)) => list,
            _ => return Ok(None),
        };

        let wanted = name.to_lowercase();
        let found = challenges.into_iter().find(|challenge| {
            challenge
                .get("name")
                .and_then(Value::as_str)
                .map(|n| n.to_lowercase() == wanted)
                .unwrap_or(false)
        });

        if found.is_none() {
            debug!(challenge = %name, "challenge not found");
        }
        Ok(found)
    }

    pub async fn create_opportunity<T: Serialize>(
        &self,
        challenge_id: i64,
        opportunity: &T,
    ) -> Result<Option<Value>> {
        let response = self
            .graphql
            .execute(
                op::CREATE_OPPORTUNITY,
                json!({
                    "challengeID": challenge_id,
                    "opportunityData": serde_json::to_value(opportunity)?,
                }),
            )
            .await?;
        ensure_no_errors(&response.errors)?;
        Ok(response.take_field("createOpportunityOnChallenge"))
    }

    pub async fn add_reference(
        &self,
        profile_id: &str,
        name: &str,
        uri: &str,
        description: &str,
    ) -> Result<Option<Value>> {
        let response = self
            .graphql
            .execute(
                op::CREATE_REFERENCE_ON_PROFILE,
                json!({
                    "profileID": parse_id(profile_id, "profile id")?,
                    "referenceInput": {
                        "name": name,
                        "uri": uri,
                        "description": description,
                    },
                }),
            )
            .await?;
        ensure_no_errors(&response.errors)?;
        Ok(response.take_field("createReferenceOnProfile"))
    }

    /// Update the profile of the user addressed by email. Returns false when
    /// the user has no profile to update.
    pub async fn update_user_profile(
        &self,
        user_email: &str,
        description: &str,
        avatar_uri: &str,
    ) -> Result<bool> {
        let response = self
            .graphql
            .execute(op::USER, json!({"ID": user_email}))
            .await?;
        ensure_no_errors(&response.errors)?;

        let profile_id = response
            .take_field("user")
            .as_ref()
            .and_then(|user| user.get("profile"))
            .and_then(|profile| profile.get("id"))
            .and_then(id_string);

        match profile_id {
            Some(id) => {
                let updated = self
                    .update_profile(&id, Some(avatar_uri), Some(description))
                    .await?;
                Ok(updated.is_some())
            }
            None => {
                debug!(user = %user_email, "user has no profile");
                Ok(false)
            }
        }
    }

    pub async fn update_profile(
        &self,
        profile_id: &str,
        avatar_uri: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<Value>> {
        let response = self
            .graphql
            .execute(
                op::UPDATE_PROFILE,
                json!({
                    "ID": parse_id(profile_id, "profile id")?,
                    "profileData": {
                        "avatar": avatar_uri,
                        "description": description,
                        "tagsetsData": [],
                        "referencesData": [],
                    },
                }),
            )
            .await?;
        ensure_no_errors(&response.errors)?;
        Ok(response.take_field("updateProfile"))
    }

    /// Create a named tagset on a profile and fill it with the given tags.
    /// Returns false when the tagset creation produced no payload.
    pub async fn create_tagset_on_profile(
        &self,
        profile_id: &str,
        tagset_name: &str,
        tags: &[String],
    ) -> Result<bool> {
        let response = self
            .graphql
            .execute(
                op::CREATE_TAGSET_ON_PROFILE,
                json!({
                    "profileID": parse_id(profile_id, "profile id")?,
                    "tagsetName": tagset_name,
                }),
            )
            .await?;
        ensure_no_errors(&response.errors)?;

        let tagset_id = match response
            .take_field("createTagsetOnProfile")
            .as_ref()
            .and_then(|tagset| tagset.get("id"))
            .and_then(id_string)
        {
            Some(id) => id,
            None => return Ok(false),
        };

        let response = self
            .graphql
            .execute(
                op::REPLACE_TAGS_ON_TAGSET,
                json!({
                    "tagsetID": parse_id(&tagset_id, "tagset id")?,
                    "tags": tags,
                }),
            )
            .await?;
        ensure_no_errors(&response.errors)?;
        Ok(true)
    }

    pub async fn add_user_to_group(&self, user_id: &str, group_id: &str) -> Result<bool> {
        let response = self
            .graphql
            .execute(
                op::ADD_USER_TO_GROUP,
                json!({
                    "userID": parse_id(user_id, "user id")?,
                    "groupID": parse_id(group_id, "group id")?,
                }),
            )
            .await?;
        ensure_no_errors(&response.errors)?;
        Ok(response
            .take_field("addUserToGroup")
            .map(|value| is_truthy(&value))
            .unwrap_or(false))
    }

    /// Add a user to the challenge with the given name. Returns `None` when
    /// no such challenge exists.
    pub async fn add_user_to_challenge(
        &self,
        challenge_name: &str,
        user_id: &str,
    ) -> Result<Option<Value>> {
        let challenge = match self.get_challenge(challenge_name).await? {
            Some(challenge) => challenge,
            None => return Ok(None),
        };
        let challenge_id = challenge_id(&challenge, challenge_name)?;

        let response = self
            .graphql
            .execute(
                op::ADD_USER_TO_CHALLENGE,
                json!({
                    "userID": parse_id(user_id, "user id")?,
                    "challengeID": challenge_id,
                }),
            )
            .await?;
        ensure_no_errors(&response.errors)?;
        Ok(response.take_field("addUserToChallenge"))
    }

    /// Register an organisation as lead for the named challenge. Returns
    /// false when no such challenge exists.
    pub async fn add_challenge_lead(
        &self,
        challenge_name: &str,
        organisation_id: &str,
    ) -> Result<bool> {
        let challenge = match self.get_challenge(challenge_name).await? {
            Some(challenge) => challenge,
            None => return Ok(false),
        };
        let challenge_id = challenge_id(&challenge, challenge_name)?;

        let response = self
            .graphql
            .execute(
                op::ADD_CHALLENGE_LEAD,
                json!({
                    "challengeID": challenge_id,
                    "organisationID": parse_id(organisation_id, "organisation id")?,
                }),
            )
            .await?;
        ensure_no_errors(&response.errors)?;
        Ok(response
            .take_field("addChallengeLead")
            .map(|value| is_truthy(&value))
            .unwrap_or(false))
    }

    pub async fn update_ecoverse_context<T: Serialize>(&self, context: &T) -> Result<Option<Value>> {
        let response = self
            .graphql
            .execute(
                op::UPDATE_ECOVERSE,
                json!({
                    "ecoverseData": {
                        "context": serde_json::to_value(context)?,
                    },
                }),
            )
            .await?;
        ensure_no_errors(&response.errors)?;
        Ok(response.take_field("updateEcoverse"))
    }

    pub async fn add_tag_to_tagset(&self, tagset_id: &str, tag: &str) -> Result<Option<Value>> {
        let response = self
            .graphql
            .execute(
                op::ADD_TAG_TO_TAGSET,
                json!({
                    "tagsetID": parse_id(tagset_id, "tagset id")?,
                    "tag": tag,
                }),
            )
            .await?;
        ensure_no_errors(&response.errors)?;
        Ok(response.take_field("addTagToTagset"))
    }

    pub async fn create_relation(
        &self,
        opportunity_id: i64,
        relation_type: &str,
        description: &str,
        actor_name: &str,
        actor_role: &str,
        actor_type: &str,
    ) -> Result<Option<Value>> {
        let response = self
            .graphql
            .execute(
                op::CREATE_RELATION,
                json!({
                    "opportunityID": opportunity_id,
                    "relationData": {
                        "type": relation_type,
                        "description": description,
                        "actorName": actor_name,
                        "actorType": actor_type,
                        "actorRole": actor_role,
                    },
                }),
            )
            .await?;
        ensure_no_errors(&response.errors)?;
        Ok(response.take_field("createRelation"))
    }

    pub async fn create_actor_group(
        &self,
        opportunity_id: i64,
        name: &str,
        description: &str,
    ) -> Result<Option<Value>> {
        let response = self
            .graphql
            .execute(
                op::CREATE_ACTOR_GROUP,
                json!({
                    "opportunityID": opportunity_id,
                    "actorGroupData": {
                        "name": name,
                        "description": description,
                    },
                }),
            )
            .await?;
        ensure_no_errors(&response.errors)?;
        Ok(response.take_field("createActorGroup"))
    }

    pub async fn create_actor(
        &self,
        actor_group_id: i64,
        name: &str,
        value: Option<&str>,
        impact: Option<&str>,
        description: &str,
    ) -> Result<Option<Value>> {
        let response = self
            .graphql
            .execute(
                op::CREATE_ACTOR,
                json!({
                    "actorGroupID": actor_group_id,
                    "actorData": {
                        "name": name,
                        "value": value,
                        "impact": impact,
                        "description": description,
                    },
                }),
            )
            .await?;
        ensure_no_errors(&response.errors)?;
        Ok(response.take_field("createActor"))
    }

    pub async fn update_actor(
        &self,
        actor_id: i64,
        name: &str,
        value: &str,
        impact: &str,
        description: &str,
    ) -> Result<Option<Value>> {
        let response = self
            .graphql
            .execute(
                op::UPDATE_ACTOR,
                json!({
                    "ID": actor_id,
                    "actorData": {
                        "name": name,
                        "value": value,
                        "impact": impact,
                        "description": description,
                    },
                }),
            )
            .await?;
        ensure_no_errors(&response.errors)?;
        Ok(response.take_field("updateActor"))
    }

    pub async fn create_aspect(
        &self,
        opportunity_id: i64,
        title: &str,
        framing: &str,
        explanation: &str,
    ) -> Result<Option<Value>> {
        let response = self
            .graphql
            .execute(
                op::CREATE_ASPECT,
                json!({
                    "opportunityID": opportunity_id,
                    "aspectData": {
                        "title": title,
                        "framing": framing,
                        "explanation": explanation,
                    },
                }),
            )
            .await?;
        ensure_no_errors(&response.errors)?;
        Ok(response.take_field("createAspect"))
    }

    /// Create a group at the ecoverse level.
    pub async fn create_ecoverse_group(&self, group_name: &str) -> Result<Option<Value>> {
        let response = self
            .graphql
            .execute(op::CREATE_GROUP_ON_ECOVERSE, json!({"groupName": group_name}))
            .await?;
        ensure_no_errors(&response.errors)?;
        Ok(response.take_field("createGroupOnEcoverse"))
    }

    /// Rename the host organisation and, when a logo URI is given, attach it
    /// as a reference on the host profile first. Returns `None` when host
    /// info is unavailable.
    pub async fn update_host_organisation(
        &self,
        name: &str,
        logo_uri: Option<&str>,
    ) -> Result<Option<Value>> {
        let response = self.graphql.execute(op::HOST_INFO, json!({})).await?;
        ensure_no_errors(&response.errors)?;

        let host = match response.take_field("host") {
            Some(host) if !host.is_null() => host,
            _ => {
                debug!("host info unavailable");
                return Ok(None);
            }
        };

        let host_id = host
            .get("id")
            .and_then(id_string)
            .context("host info has no id")?;
        let host_profile_id = host
            .get("profile")
            .and_then(|profile| profile.get("id"))
            .and_then(id_string)
            .context("host info has no profile id")?;

        if let Some(uri) = logo_uri {
            self.add_reference(&host_profile_id, "logo", uri, "Logo for the ecoverse host")
                .await?;
        }

        let response = self
            .graphql
            .execute(
                op::UPDATE_ORGANISATION,
                json!({
                    "orgID": parse_id(&host_id, "host organisation id")?,
                    "organisationData": {
                        "name": name,
                    },
                }),
            )
            .await?;
        ensure_no_errors(&response.errors)?;
        Ok(response.take_field("updateOrganisation"))
    }
}

/// Coerce a string id to the numeric form the API expects.
fn parse_id(value: &str, what: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .with_context(|| format!("{what} `{value}` is not numeric"))
}

/// Ids arrive as JSON strings or numbers depending on the server version.
fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn challenge_id(challenge: &Value, name: &str) -> Result<i64> {
    let id = challenge
        .get("id")
        .and_then(id_string)
        .with_context(|| format!("challenge `{name}` has no id"))?;
    parse_id(&id, "challenge id")
}

fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}
