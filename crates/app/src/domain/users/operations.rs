//! User operations.

use crate::gateway::Operation;

pub(crate) const CREATE_USER: Operation = Operation {
    field: "createUser",
    document: r"
mutation CreateUser($input: CreateUserInput!) {
    createUser(input: $input) {
        id
        name
        email
        role
        active
    }
}
",
};

pub(crate) const USERS: Operation = Operation {
    field: "users",
    document: r"
query GetUsers {
    users {
        id
        name
        email
        role
        active
    }
}
",
};

pub(crate) const USER: Operation = Operation {
    field: "user",
    document: r"
query GetUser($id: ID!) {
    user(id: $id) {
        id
        name
        email
        role
        active
    }
}
",
};

pub(crate) const UPDATE_USER: Operation = Operation {
    field: "updateUser",
    document: r"
mutation UpdateUser($input: UpdateUserInput!) {
    updateUser(input: $input) {
        id
        name
        email
        role
        active
    }
}
",
};

pub(crate) const DELETE_USER: Operation = Operation {
    field: "deleteUser",
    document: r"
mutation DeleteUser($id: ID!) {
    deleteUser(id: $id)
}
",
};
