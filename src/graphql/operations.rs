//! Operation documents for the ecoverse API.
//!
//! Each remote query or mutation the client supports is pinned here as a
//! named document; the executor sends the pair as-is. Keeping the documents
//! in one module makes schema drift a one-file diff.

/// A named GraphQL operation and its document text.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
}

pub const ECOVERSE_NAME: Operation = Operation {
    name: "ecoverseName",
    document: "query ecoverseName { name }",
};

pub const CHALLENGES: Operation = Operation {
    name: "challenges",
    document: "query challenges { challenges { id name } }",
};

pub const USER: Operation = Operation {
    name: "user",
    document: "query user($ID: String!) { user(ID: $ID) { id name profile { id } } }",
};

pub const HOST_INFO: Operation = Operation {
    name: "hostInfo",
    document: "query hostInfo { host { id name profile { id } } }",
};

pub const CREATE_OPPORTUNITY: Operation = Operation {
    name: "createOpportunity",
    document: "mutation createOpportunity($challengeID: Float!, $opportunityData: OpportunityInput!) { \
               createOpportunityOnChallenge(challengeID: $challengeID, opportunityData: $opportunityData) { id name } }",
};

pub const CREATE_REFERENCE_ON_PROFILE: Operation = Operation {
    name: "createReferenceOnProfile",
    document: "mutation createReferenceOnProfile($profileID: Float!, $referenceInput: ReferenceInput!) { \
               createReferenceOnProfile(profileID: $profileID, referenceInput: $referenceInput) { id name uri } }",
};

pub const UPDATE_PROFILE: Operation = Operation {
    name: "updateProfile",
    document: "mutation updateProfile($ID: Float!, $profileData: ProfileInput!) { \
               updateProfile(ID: $ID, profileData: $profileData) }",
};

pub const CREATE_TAGSET_ON_PROFILE: Operation = Operation {
    name: "createTagsetOnProfile",
    document: "mutation createTagsetOnProfile($profileID: Float!, $tagsetName: String!) { \
               createTagsetOnProfile(profileID: $profileID, tagsetName: $tagsetName) { id name } }",
};

pub const REPLACE_TAGS_ON_TAGSET: Operation = Operation {
    name: "replaceTagsOnTagset",
    document: "mutation replaceTagsOnTagset($tagsetID: Float!, $tags: [String!]!) { \
               replaceTagsOnTagset(tagsetID: $tagsetID, tags: $tags) { id tags } }",
};

pub const ADD_USER_TO_GROUP: Operation = Operation {
    name: "addUserToGroup",
    document: "mutation addUserToGroup($userID: Float!, $groupID: Float!) { \
               addUserToGroup(userID: $userID, groupID: $groupID) }",
};

pub const ADD_USER_TO_CHALLENGE: Operation = Operation {
    name: "addUserToChallenge",
    document: "mutation addUserToChallenge($userID: Float!, $challengeID: Float!) { \
               addUserToChallenge(userID: $userID, challengeID: $challengeID) { id name } }",
};

pub const ADD_CHALLENGE_LEAD: Operation = Operation {
    name: "addChallengeLead",
    document: "mutation addChallengeLead($challengeID: Float!, $organisationID: Float!) { \
               addChallengeLead(challengeID: $challengeID, organisationID: $organisationID) }",
};

pub const UPDATE_ECOVERSE: Operation = Operation {
    name: "updateEcoverse",
    document: "mutation updateEcoverse($ecoverseData: EcoverseInput!) { \
               updateEcoverse(ecoverseData: $ecoverseData) { id name } }",
};

pub const ADD_TAG_TO_TAGSET: Operation = Operation {
    name: "addTagToTagset",
    document: "mutation addTagToTagset($tagsetID: Float!, $tag: String!) { \
               addTagToTagset(tagsetID: $tagsetID, tag: $tag) { id tags } }",
};

pub const CREATE_RELATION: Operation = Operation {
    name: "createRelation",
    document: "mutation createRelation($opportunityID: Float!, $relationData: RelationInput!) { \
               createRelation(opportunityID: $opportunityID, relationData: $relationData) { id type } }",
};

pub const CREATE_ACTOR_GROUP: Operation = Operation {
    name: "createActorGroup",
    document: "mutation createActorGroup($opportunityID: Float!, $actorGroupData: ActorGroupInput!) { \
               createActorGroup(opportunityID: $opportunityID, actorGroupData: $actorGroupData) { id name } }",
};

pub const CREATE_ACTOR: Operation = Operation {
    name: "createActor",
    document: "mutation createActor($actorGroupID: Float!, $actorData: ActorInput!) { \
               createActor(actorGroupID: $actorGroupID, actorData: $actorData) { id name } }",
};

pub const UPDATE_ACTOR: Operation = Operation {
    name: "updateActor",
    document: "mutation updateActor($ID: Float!, $actorData: ActorInput!) { \
               updateActor(ID: $ID, actorData: $actorData) { id name } }",
};

pub const CREATE_ASPECT: Operation = Operation {
    name: "createAspect",
    document: "mutation createAspect($opportunityID: Float!, $aspectData: AspectInput!) { \
               createAspect(opportunityID: $opportunityID, aspectData: $aspectData) { id title } }",
};

pub const CREATE_GROUP_ON_ECOVERSE: Operation = Operation {
    name: "createGroupOnEcoverse",
    document: "mutation createGroupOnEcoverse($groupName: String!) { \
               createGroupOnEcoverse(groupName: $groupName) { id name } }",
};

pub const UPDATE_ORGANISATION: Operation = Operation {
    name: "updateOrganisation",
    document: "mutation updateOrganisation($orgID: Float!, $organisationData: OrganisationInput!) { \
               updateOrganisation(orgID: $orgID, organisationData: $organisationData) { id name } }",
};
