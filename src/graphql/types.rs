use crate::model;
use async_graphql::SimpleObject;

/// A blog author. `posts` is resolved on demand.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: a.id,
            first_name: a.first_name,
            last_name: a.last_name,
        }
    }
}

/// A post. `author` is resolved on demand from the hidden `author_id`.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub text: String,
    #[graphql(skip)]
    pub author_id: i64,
}

impl From<model::Post> for Post {
    fn from(p: model::Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            text: p.text,
            author_id: p.author_id,
        }
    }
}
