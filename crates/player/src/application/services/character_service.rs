//! Character service - list/create/update/delete against the backend
//!
//! Read paths favor offline usability and fall back to demo content;
//! write paths surface their errors to the caller.

use std::sync::Arc;

use anyhow::Result;

use echoveil_domain::{Character, CharacterDraft, CharacterId};

use crate::infrastructure::demo;
use crate::ports::outbound::GameServerPort;

/// Service for character CRUD against the game server
pub struct CharacterService {
    server: Arc<dyn GameServerPort>,
}

impl CharacterService {
    pub fn new(server: Arc<dyn GameServerPort>) -> Self {
        Self { server }
    }

    /// List the device's characters, degrading to demo characters when the
    /// backend cannot be reached or answers badly.
    pub async fn list_characters(&self) -> Vec<Character> {
        match self.server.list_characters().await {
            Ok(characters) => characters,
            Err(e) => {
                tracing::warn!(error = %e, "character list unavailable, using demo roster");
                demo::demo_characters()
            }
        }
    }

    /// Commit a builder draft: validate, build, and persist
    pub async fn create_from_draft(&self, draft: &CharacterDraft) -> Result<Character> {
        let character = draft.build()?;
        let persisted = self.server.create_character(&character).await?;
        Ok(persisted)
    }

    /// Persist edits to an existing character
    pub async fn update_character(&self, character: &Character) -> Result<Character> {
        character.validate()?;
        let persisted = self.server.update_character(character).await?;
        Ok(persisted)
    }

    /// Delete a character (the gateway treats 404 as already deleted)
    pub async fn delete_character(&self, id: &CharacterId) -> Result<()> {
        self.server.delete_character(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::ports::outbound::MockGameServerPort;

    fn complete_draft() -> CharacterDraft {
        CharacterDraft {
            name: "Kira Voss".into(),
            species: Some("Human".into()),
            class: Some("Sentinel".into()),
            background: Some("Outlaw".into()),
            ..CharacterDraft::new()
        }
    }

    #[tokio::test]
    async fn test_list_falls_back_to_demo_roster() {
        let mut server = MockGameServerPort::new();
        server
            .expect_list_characters()
            .returning(|| Err(ApiError::Transport("connection refused".into())));

        let service = CharacterService::new(Arc::new(server));
        let characters = service.list_characters().await;
        assert!(!characters.is_empty());
        assert_eq!(characters[0].name, "Kira Voss");
    }

    #[tokio::test]
    async fn test_list_prefers_server_roster() {
        let mut server = MockGameServerPort::new();
        server.expect_list_characters().returning(|| {
            Ok(vec![Character::new("Rook", "Droid", "Engineer", "Salvage")])
        });

        let service = CharacterService::new(Arc::new(server));
        let characters = service.list_characters().await;
        assert_eq!(characters.len(), 1);
        assert_eq!(characters[0].name, "Rook");
    }

    #[tokio::test]
    async fn test_create_rejects_incomplete_draft_without_network() {
        let mut server = MockGameServerPort::new();
        server.expect_create_character().never();

        let service = CharacterService::new(Arc::new(server));
        let mut draft = complete_draft();
        draft.name = "  ".into();
        assert!(service.create_from_draft(&draft).await.is_err());
    }

    #[tokio::test]
    async fn test_create_surfaces_server_error() {
        let mut server = MockGameServerPort::new();
        server
            .expect_create_character()
            .returning(|_| Err(ApiError::Status { code: 500 }));

        let service = CharacterService::new(Arc::new(server));
        let err = service
            .create_from_draft(&complete_draft())
            .await
            .expect_err("write errors surface");
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_delete_passes_through() {
        let mut server = MockGameServerPort::new();
        server.expect_delete_character().returning(|_| Ok(()));

        let service = CharacterService::new(Arc::new(server));
        service
            .delete_character(&CharacterId::from_string("c1"))
            .await
            .expect("delete succeeds");
    }
}
